//! UI Text
//!
//! Fixed message table for the three supported locales.

use kanban_core::Priority;
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
    Uz,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Uz];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Uz => "uz",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
            Locale::Uz => "O‘zbekcha",
        }
    }
}

/// Message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppTitle,
    SignIn,
    SignOut,
    LoginTitle,
    LoginDescription,
    EmailLabel,
    EmailPlaceholder,
    EmailInvalid,
    LoginFailed,
    Language,
    AddColumn,
    EditColumn,
    DeleteColumn,
    DeleteColumnWarning,
    ColumnTitle,
    ColumnTitlePlaceholder,
    ColumnColor,
    ColorInvalid,
    DragHandle,
    AddTask,
    EditTask,
    DeleteTask,
    TaskTitle,
    TaskTitlePlaceholder,
    Description,
    DescriptionPlaceholder,
    Priority,
    PriorityHigh,
    PriorityMedium,
    PriorityLow,
    Assignee,
    Unassigned,
    DueDate,
    NoDueDate,
    Status,
    NoTasks,
    DropHere,
    TitleRequired,
    TitleTooLong,
    DescriptionTooLong,
    DateInvalid,
    Save,
    Cancel,
    Close,
    Edit,
    ConfirmDelete,
}

impl Key {
    pub const ALL: &'static [Key] = &[
        Key::AppTitle, Key::SignIn, Key::SignOut, Key::LoginTitle,
        Key::LoginDescription, Key::EmailLabel, Key::EmailPlaceholder, Key::EmailInvalid,
        Key::LoginFailed, Key::Language, Key::AddColumn, Key::EditColumn, Key::DeleteColumn,
        Key::DeleteColumnWarning, Key::ColumnTitle, Key::ColumnTitlePlaceholder, Key::ColumnColor,
        Key::ColorInvalid, Key::DragHandle, Key::AddTask, Key::EditTask, Key::DeleteTask,
        Key::TaskTitle, Key::TaskTitlePlaceholder, Key::Description, Key::DescriptionPlaceholder,
        Key::Priority, Key::PriorityHigh, Key::PriorityMedium, Key::PriorityLow, Key::Assignee,
        Key::Unassigned, Key::DueDate, Key::NoDueDate, Key::Status, Key::NoTasks, Key::DropHere,
        Key::TitleRequired, Key::TitleTooLong, Key::DescriptionTooLong, Key::DateInvalid,
        Key::Save, Key::Cancel, Key::Close, Key::Edit, Key::ConfirmDelete,
    ];
}

/// Label key for a priority
pub fn priority_key(priority: Priority) -> Key {
    match priority {
        Priority::High => Key::PriorityHigh,
        Priority::Medium => Key::PriorityMedium,
        Priority::Low => Key::PriorityLow,
    }
}

/// Translate a key
pub fn t(locale: Locale, key: Key) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Ru => ru(key),
        Locale::Uz => uz(key),
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "Kanban Board",
        Key::SignIn => "Sign in",
        Key::SignOut => "Sign out",
        Key::LoginTitle => "Welcome back",
        Key::LoginDescription => "Enter your email to open your board.",
        Key::EmailLabel => "Email",
        Key::EmailPlaceholder => "name@example.com",
        Key::EmailInvalid => "Invalid email address.",
        Key::LoginFailed => "Sign-in failed. Please try again.",
        Key::Language => "Language",
        Key::AddColumn => "Add column",
        Key::EditColumn => "Edit column",
        Key::DeleteColumn => "Delete column",
        Key::DeleteColumnWarning => "This will permanently delete the column and all tasks within it.",
        Key::ColumnTitle => "Column title",
        Key::ColumnTitlePlaceholder => "e.g., Under Review",
        Key::ColumnColor => "Color (HEX)",
        Key::ColorInvalid => "Use HEX format: e.g., '#ffffff' or '#fff'.",
        Key::DragHandle => "Drag to reorder column",
        Key::AddTask => "Add task",
        Key::EditTask => "Edit task",
        Key::DeleteTask => "Delete task",
        Key::TaskTitle => "Title",
        Key::TaskTitlePlaceholder => "e.g., Write release notes",
        Key::Description => "Description",
        Key::DescriptionPlaceholder => "Optional details",
        Key::Priority => "Priority",
        Key::PriorityHigh => "High",
        Key::PriorityMedium => "Medium",
        Key::PriorityLow => "Low",
        Key::Assignee => "Assignee",
        Key::Unassigned => "Unassigned",
        Key::DueDate => "Due date",
        Key::NoDueDate => "No due date",
        Key::Status => "Status",
        Key::NoTasks => "No tasks yet.",
        Key::DropHere => "Drop here",
        Key::TitleRequired => "Title is required.",
        Key::TitleTooLong => "Title is too long.",
        Key::DescriptionTooLong => "Description cannot exceed 200 characters.",
        Key::DateInvalid => "Use the date format YYYY-MM-DD.",
        Key::Save => "Save",
        Key::Cancel => "Cancel",
        Key::Close => "Close",
        Key::Edit => "Edit",
        Key::ConfirmDelete => "Delete?",
    }
}

fn ru(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "Канбан-доска",
        Key::SignIn => "Войти",
        Key::SignOut => "Выйти",
        Key::LoginTitle => "С возвращением",
        Key::LoginDescription => "Введите email, чтобы открыть доску.",
        Key::EmailLabel => "Email",
        Key::EmailPlaceholder => "name@example.com",
        Key::EmailInvalid => "Неверный адрес электронной почты.",
        Key::LoginFailed => "Не удалось войти. Попробуйте ещё раз.",
        Key::Language => "Язык",
        Key::AddColumn => "Добавить колонку",
        Key::EditColumn => "Изменить колонку",
        Key::DeleteColumn => "Удалить колонку",
        Key::DeleteColumnWarning => "Колонка и все её задачи будут удалены безвозвратно.",
        Key::ColumnTitle => "Название колонки",
        Key::ColumnTitlePlaceholder => "например, На проверке",
        Key::ColumnColor => "Цвет (HEX)",
        Key::ColorInvalid => "Используйте формат HEX: '#ffffff' или '#fff'.",
        Key::DragHandle => "Перетащите, чтобы изменить порядок",
        Key::AddTask => "Добавить задачу",
        Key::EditTask => "Изменить задачу",
        Key::DeleteTask => "Удалить задачу",
        Key::TaskTitle => "Название",
        Key::TaskTitlePlaceholder => "например, Написать заметки к релизу",
        Key::Description => "Описание",
        Key::DescriptionPlaceholder => "Необязательные подробности",
        Key::Priority => "Приоритет",
        Key::PriorityHigh => "Высокий",
        Key::PriorityMedium => "Средний",
        Key::PriorityLow => "Низкий",
        Key::Assignee => "Исполнитель",
        Key::Unassigned => "Не назначен",
        Key::DueDate => "Срок",
        Key::NoDueDate => "Без срока",
        Key::Status => "Статус",
        Key::NoTasks => "Задач пока нет.",
        Key::DropHere => "Перетащите сюда",
        Key::TitleRequired => "Название обязательно.",
        Key::TitleTooLong => "Слишком длинное название.",
        Key::DescriptionTooLong => "Описание не может превышать 200 символов.",
        Key::DateInvalid => "Используйте формат даты ГГГГ-ММ-ДД.",
        Key::Save => "Сохранить",
        Key::Cancel => "Отмена",
        Key::Close => "Закрыть",
        Key::Edit => "Изменить",
        Key::ConfirmDelete => "Удалить?",
    }
}

fn uz(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "Kanban doskasi",
        Key::SignIn => "Kirish",
        Key::SignOut => "Chiqish",
        Key::LoginTitle => "Xush kelibsiz",
        Key::LoginDescription => "Doskani ochish uchun emailingizni kiriting.",
        Key::EmailLabel => "Email",
        Key::EmailPlaceholder => "name@example.com",
        Key::EmailInvalid => "Email manzili noto‘g‘ri.",
        Key::LoginFailed => "Kirib bo‘lmadi. Qaytadan urinib ko‘ring.",
        Key::Language => "Til",
        Key::AddColumn => "Ustun qo‘shish",
        Key::EditColumn => "Ustunni tahrirlash",
        Key::DeleteColumn => "Ustunni o‘chirish",
        Key::DeleteColumnWarning => "Ustun va undagi barcha vazifalar butunlay o‘chiriladi.",
        Key::ColumnTitle => "Ustun nomi",
        Key::ColumnTitlePlaceholder => "masalan, Ko‘rib chiqilmoqda",
        Key::ColumnColor => "Rang (HEX)",
        Key::ColorInvalid => "HEX formatidan foydalaning: '#ffffff' yoki '#fff'.",
        Key::DragHandle => "Tartibni o‘zgartirish uchun sudrang",
        Key::AddTask => "Vazifa qo‘shish",
        Key::EditTask => "Vazifani tahrirlash",
        Key::DeleteTask => "Vazifani o‘chirish",
        Key::TaskTitle => "Nomi",
        Key::TaskTitlePlaceholder => "masalan, Reliz qaydlarini yozish",
        Key::Description => "Tavsif",
        Key::DescriptionPlaceholder => "Qo‘shimcha ma’lumot",
        Key::Priority => "Muhimlik",
        Key::PriorityHigh => "Yuqori",
        Key::PriorityMedium => "O‘rta",
        Key::PriorityLow => "Past",
        Key::Assignee => "Ijrochi",
        Key::Unassigned => "Tayinlanmagan",
        Key::DueDate => "Muddat",
        Key::NoDueDate => "Muddatsiz",
        Key::Status => "Holat",
        Key::NoTasks => "Hozircha vazifalar yo‘q.",
        Key::DropHere => "Shu yerga tashlang",
        Key::TitleRequired => "Nomi kiritilishi shart.",
        Key::TitleTooLong => "Nomi juda uzun.",
        Key::DescriptionTooLong => "Tavsif 200 belgidan oshmasligi kerak.",
        Key::DateInvalid => "Sana formati: YYYY-MM-DD.",
        Key::Save => "Saqlash",
        Key::Cancel => "Bekor qilish",
        Key::Close => "Yopish",
        Key::Edit => "Tahrirlash",
        Key::ConfirmDelete => "O‘chirilsinmi?",
    }
}
