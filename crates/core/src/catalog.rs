//! Static content registry: courses, olympiads, teachers and the quiz bank.

use crate::error::Error;
use crate::model::{
    Course, CourseId, Olympiad, OlympiadId, QuestionDraft, Quiz, QuizDraft, QuizError, QuizId,
    Teacher, TeacherId,
};

/// Read-only lookup tables supplied at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
    olympiads: Vec<Olympiad>,
    teachers: Vec<Teacher>,
    quizzes: Vec<Quiz>,
}

impl Catalog {
    /// Build a catalog, validating every quiz.
    ///
    /// # Errors
    ///
    /// Returns `Error::Quiz` if a quiz draft is invalid or two quizzes share an id.
    pub fn new(
        courses: Vec<Course>,
        olympiads: Vec<Olympiad>,
        teachers: Vec<Teacher>,
        quiz_drafts: Vec<QuizDraft>,
    ) -> Result<Self, Error> {
        let mut quizzes: Vec<Quiz> = Vec::with_capacity(quiz_drafts.len());
        for draft in quiz_drafts {
            let quiz = draft.validate()?;
            if quizzes.iter().any(|existing| existing.id() == quiz.id()) {
                return Err(QuizError::DuplicateId(quiz.id().clone()).into());
            }
            quizzes.push(quiz);
        }

        Ok(Self {
            courses,
            olympiads,
            teachers,
            quizzes,
        })
    }

    /// The content shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `Error::Quiz` if the bundled quiz bank fails validation.
    pub fn builtin() -> Result<Self, Error> {
        Self::new(
            builtin_courses(),
            builtin_olympiads(),
            builtin_teachers(),
            builtin_quizzes(),
        )
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn olympiads(&self) -> &[Olympiad] {
        &self.olympiads
    }

    #[must_use]
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    #[must_use]
    pub fn olympiad(&self, id: &OlympiadId) -> Option<&Olympiad> {
        self.olympiads.iter().find(|olympiad| &olympiad.id == id)
    }

    #[must_use]
    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| &teacher.id == id)
    }

    #[must_use]
    pub fn quiz(&self, id: &QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    icon: &str,
    color: &str,
    description: &str,
    image: &str,
    syllabus: &[&str],
    outcomes: &str,
) -> Course {
    Course {
        id: CourseId::new(id),
        title: title.into(),
        icon: icon.into(),
        color: color.into(),
        description: description.into(),
        image: image.into(),
        syllabus: strings(syllabus),
        outcomes: Some(outcomes.into()),
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_courses() -> Vec<Course> {
    vec![
        course(
            "math",
            "Математика",
            "Calculator",
            "bg-teal-500",
            "От основ алгебры до квантового исчисления. Погрузитесь в мир чисел с Quantum EC.",
            "https://images.unsplash.com/photo-1509228468518-180dd482180c?auto=format&fit=crop&q=80&w=1000",
            &[
                "Линейная алгебра",
                "Математический анализ",
                "Теория вероятностей",
                "Дискретная математика",
            ],
            "Вы научитесь решать задачи олимпиадного уровня и анализировать сложные системы данных.",
        ),
        course(
            "physics",
            "Физика",
            "Atom",
            "bg-indigo-600",
            "Законы вселенной, механика и основы квантовой физики в доступном формате.",
            "https://images.unsplash.com/photo-1636466497217-26a8cbeaf0aa?auto=format&fit=crop&q=80&w=1000",
            &[
                "Классическая механика",
                "Термодинамика",
                "Оптика и волны",
                "Квантовые системы",
            ],
            "Понимание физических процессов на макро и микро уровнях, подготовка к техническим ВУЗам.",
        ),
        course(
            "chemistry",
            "Химия",
            "FlaskConical",
            "bg-teal-500",
            "Реакции, элементы и молекулярные структуры. Химический анализ в цифровой среде.",
            "https://images.unsplash.com/photo-1532187863486-abf9d397191a?auto=format&fit=crop&q=80&w=1000",
            &[
                "Неорганическая химия",
                "Органический синтез",
                "Физическая химия",
                "Биохимия",
            ],
            "Навыки проведения виртуальных лабораторий и глубокое понимание структуры вещества.",
        ),
        course(
            "biology",
            "Биология",
            "Dna",
            "bg-indigo-600",
            "Изучение генетического кода и биосистем. От молекулы до целого организма.",
            "https://images.unsplash.com/photo-1530026405186-ed1f139313f8?auto=format&fit=crop&q=80&w=1000",
            &["Цитология", "Генетика", "Эволюционная биология", "Физиология"],
            "Освоение принципов работы живых систем и подготовка к медицинским олимпиадам.",
        ),
        course(
            "ai",
            "Искусственный интеллект",
            "Brain",
            "bg-purple-600",
            "Нейросети и машинное обучение. Технологии будущего доступны уже сегодня.",
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=1000",
            &[
                "Основы Python",
                "Машинное обучение",
                "Глубокое обучение",
                "Этика ИИ",
            ],
            "Создание собственных моделей ИИ и работа с современными фреймворками.",
        ),
    ]
}

fn olympiad(
    id: &str,
    title: &str,
    date: &str,
    description: &str,
    details: &str,
    roadmap: &[&str],
) -> Olympiad {
    Olympiad {
        id: OlympiadId::new(id),
        title: title.into(),
        description: description.into(),
        date: date.into(),
        details: details.into(),
        roadmap: strings(roadmap),
    }
}

fn builtin_olympiads() -> Vec<Olympiad> {
    vec![
        olympiad(
            "math-olymp",
            "Quantum Math Challenge",
            "15 Сентября 2024",
            "Всероссийский турнир юных математиков Quantum EC.",
            "Уровень: Сложный. Призовой фонд: Гранты на обучение и мощные ноутбуки.",
            &["Регистрация", "Отборочный тест", "Финальный этап", "Награждение"],
        ),
        olympiad(
            "phys-olymp",
            "Quantum Physics Open",
            "22 Октября 2024",
            "Международный конкурс экспериментальной физики.",
            "Уровень: Профи. Фокус на квантовой механике и термодинамике.",
            &["Подача заявки", "Решение кейсов", "Презентация", "Призы"],
        ),
        olympiad(
            "chem-olymp",
            "Quantum Chem Cup",
            "05 Ноября 2024",
            "Химический марафон будущего: синтез и анализ.",
            "Уровень: Средний. Требуется знание органической химии.",
            &["Подготовка", "Лабораторный тур", "Теория", "Результаты"],
        ),
        olympiad(
            "bio-olymp",
            "Quantum Bio Cup",
            "12 Декабря 2024",
            "Биологический олимп: генетика и биотехнологии.",
            "Уровень: Олимпиадный. Работа с реальными кейсами лабораторий.",
            &["Квалификация", "Исследование", "Защита проекта", "Гранты"],
        ),
    ]
}

fn teacher(id: &str, name: &str, subject: &str, bio: &str, quote: &str, image: &str) -> Teacher {
    Teacher {
        id: TeacherId::new(id),
        name: name.into(),
        subject: subject.into(),
        bio: bio.into(),
        image: image.into(),
        quote: Some(quote.into()),
    }
}

fn builtin_teachers() -> Vec<Teacher> {
    vec![
        teacher(
            "1",
            "Александр Петров",
            "Математика",
            "Доктор физико-математических наук, ведущий методист Quantum EC. Победитель IMO 2005.",
            "Математика — это язык, на котором говорит вселенная.",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80&w=200",
        ),
        teacher(
            "2",
            "Мария Сидорова",
            "Химия",
            "Эксперт в области органической химии, автор курса \"Цифровая Лаборатория\".",
            "В каждой реакции скрыта магия порядка.",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=200",
        ),
        teacher(
            "3",
            "Иван Кузнецов",
            "Физика",
            "Исследователь квантовых систем, готовит к олимпиадам мирового уровня.",
            "Понять физику — значит увидеть невидимое.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=200",
        ),
        teacher(
            "4",
            "Елена Белова",
            "Биология",
            "Кандидат биологических наук, специалист по генной инженерии.",
            "Жизнь — это самая сложная и красивая программа.",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=200",
        ),
    ]
}

fn builtin_quizzes() -> Vec<QuizDraft> {
    vec![
        QuizDraft {
            id: "math-base".into(),
            title: "Основы Алгебры".into(),
            subject: "Математика".into(),
            description: "Вводный тест по линейным уравнениям и функциям. Идеально для разминки перед олимпиадой.".into(),
            questions: vec![
                QuestionDraft::new(
                    1,
                    "Решите уравнение: 2x + 5 = 13",
                    ["x = 4", "x = 3", "x = 6", "x = 8"],
                    0,
                ),
                QuestionDraft::new(
                    2,
                    "Что такое дискриминант в квадратном уравнении?",
                    [
                        "Число корней",
                        "Показатель функции",
                        "Параметр уравнения",
                        "Коэффициент",
                    ],
                    0,
                ),
            ],
        },
        QuizDraft {
            id: "physics-mech".into(),
            title: "Классическая Механика".into(),
            subject: "Физика".into(),
            description: "Проверка знаний законов Ньютона, энергии и импульса.".into(),
            questions: vec![
                QuestionDraft::new(
                    1,
                    "Второй закон Ньютона гласит:",
                    ["F = ma", "E = mc²", "v = s/t", "P = UI"],
                    0,
                ),
                QuestionDraft::new(
                    2,
                    "В чем измеряется сила?",
                    ["В Джоулях", "В Ваттах", "В Ньютонах", "В Паскалях"],
                    2,
                ),
            ],
        },
        QuizDraft {
            id: "ai-intro".into(),
            title: "Введение в ML".into(),
            subject: "Искусственный интеллект".into(),
            description: "Основы машинного обучения и нейронных сетей для начинающих.".into(),
            questions: vec![
                QuestionDraft::new(
                    1,
                    "Что такое обучение с учителем?",
                    [
                        "Обучение на размеченных данных",
                        "Обучение без обратной связи",
                        "Самообучение системы",
                        "Обучение робота человеком",
                    ],
                    0,
                ),
                QuestionDraft::new(
                    2,
                    "Какая функция активации чаще всего используется в нейросетях?",
                    ["ReLU", "Sin", "Cos", "Linear"],
                    0,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.courses().len(), 5);
        assert_eq!(catalog.olympiads().len(), 4);
        assert_eq!(catalog.teachers().len(), 4);
        assert_eq!(catalog.quizzes().len(), 3);
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let quiz = catalog.quiz(&QuizId::new("physics-mech")).unwrap();
        assert_eq!(quiz.question(1).unwrap().correct_answer(), 2);
        assert_eq!(
            catalog.course(&CourseId::new("ai")).unwrap().title,
            "Искусственный интеллект"
        );
        assert_eq!(
            catalog.teacher(&TeacherId::new("3")).unwrap().subject,
            "Физика"
        );
        assert_eq!(
            catalog
                .olympiad(&OlympiadId::new("bio-olymp"))
                .unwrap()
                .roadmap
                .len(),
            4
        );
        assert!(catalog.quiz(&QuizId::new("missing")).is_none());
    }

    #[test]
    fn rejects_duplicate_quiz_ids() {
        let mut drafts = builtin_quizzes();
        drafts.push(drafts[0].clone());
        let err = Catalog::new(Vec::new(), Vec::new(), Vec::new(), drafts).unwrap_err();
        assert!(matches!(
            err,
            Error::Quiz(QuizError::DuplicateId(id)) if id == QuizId::new("math-base")
        ));
    }

    #[test]
    fn rejects_empty_quiz() {
        let drafts = vec![QuizDraft {
            id: "empty".into(),
            title: "Пустой".into(),
            ..QuizDraft::default()
        }];
        let err = Catalog::new(Vec::new(), Vec::new(), Vec::new(), drafts).unwrap_err();
        assert!(matches!(err, Error::Quiz(QuizError::NoQuestions(_))));
    }
}
