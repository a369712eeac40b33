//! FAQ catalogue
//!
//! A closed set of categories, each carrying its callback key, button label
//! and static answer text.

use serde::{Deserialize, Serialize};

/// Callback data prefix shared by all FAQ category buttons
pub const FAQ_CALLBACK_PREFIX: &str = "faq_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaqCategory {
    Subjects,
    Assessment,
    Docs,
    Psychology,
    Certificates,
    Other,
}

impl FaqCategory {
    /// All categories in menu order
    pub const ALL: [FaqCategory; 6] = [
        FaqCategory::Subjects,
        FaqCategory::Assessment,
        FaqCategory::Docs,
        FaqCategory::Psychology,
        FaqCategory::Certificates,
        FaqCategory::Other,
    ];

    /// Callback data of the category button
    pub fn key(self) -> &'static str {
        match self {
            FaqCategory::Subjects => "faq_subjects",
            FaqCategory::Assessment => "faq_assessment",
            FaqCategory::Docs => "faq_docs",
            FaqCategory::Psychology => "faq_psy",
            FaqCategory::Certificates => "faq_cert",
            FaqCategory::Other => "faq_other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::Subjects => "📚 Пән бойынша",
            FaqCategory::Assessment => "📝 Бағалау / Сабақ",
            FaqCategory::Docs => "📎 Басқару / Мақала",
            FaqCategory::Psychology => "💬 Психология / Курс",
            FaqCategory::Certificates => "🧾 Анықтама / Ашық сабақ",
            FaqCategory::Other => "🎯 Сайыс / Авторлық",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            FaqCategory::Subjects => "📚 <b>Пән бойынша сұрақтар:</b>\n- Математика\n- Қазақ тілі\n- Жаратылыстану\n- Дүниетану\n- Әліппе",
            FaqCategory::Assessment => "📝 <b>Бағалау мен сабақ жоспары:</b>\n- Сабақ құрылымы\n- Бағалау түрлері\n- Кеңейтілген дағдылар",
            FaqCategory::Docs => "📎 <b>Құжаттар / Мақала / Басқару:</b>\n- Сыныпты басқару\n- Құжат жүргізу\n- Мақала жариялау",
            FaqCategory::Psychology => "💬 <b>Психологиялық тренингтер мен курс:</b>\n- Тренинг үлгілері\n- Курстардан алған әдістер",
            FaqCategory::Certificates => "🧾 <b>Анықтама / Ашық сабақ:</b>\n- Ашық сабақ үлгілері\n- Анықтама рәсімдеу жолдары",
            FaqCategory::Other => "🎯 <b>Сайыс / Авторлық бағдарлама:</b>\n- Педагогикалық идеялар сайысы\n- Авторлық бағдарлама\n- Аттестация сұрақтары",
        }
    }

    /// Look a category up by its callback key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}
