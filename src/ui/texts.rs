//! Static message texts and button labels
//!
//! All texts use Telegram HTML parse mode.

/// Main menu button: FAQ list
pub const FAQ_BUTTON: &str = "📄 Жиі қойылатын сұрақтар";
/// Main menu button: lead form
pub const LEAD_FORM_BUTTON: &str = "📝 Өтінім қалдыру";
/// Phone step button that asks the client to share the account's contact
pub const SHARE_CONTACT_BUTTON: &str = "📲 Нөмірімді жіберу";
/// Phone step button that switches to manual entry
pub const MANUAL_PHONE_BUTTON: &str = "✍️ Өзім жазамын";
pub const BACK_BUTTON: &str = "⬅️ Артқа";
pub const MAIN_MENU_BUTTON: &str = "🏠 Басты мәзір";

pub const WELCOME: &str = "🎓 <b>ӘДІСТЕМЕЛІК КӨМЕК БОТЫ</b>\n\
━━━━━━━━━━━━━━━━━━━━━\n\
🔊 Сәлеметсіз бе, құрметті ұстаз!\n\n\
Бұл бот бастауыш сынып мұғалімдеріне арналған.\n\
Мұндағы барлық ақпарат <b>бастауыш білім беру стандарты</b> негізінде дайындалған.\n\n\
📚 <b>Сізге көмектесе аламыз:</b>\n\
✅ Сабақ жоспары (сабақтың кезеңдері, аспектілері, құндылықтар, кеңейтілген дағдыларды енгізу)\n\
✅ Бағалау жүйесі (қалыптастырушы бағалау, бақылау, бағалау түрлері)\n\
✅ Пәндік сұрақтар (математика, қазақ тілі, әдебиет, жаратылыстану, дүниетану)\n\
✅ Құжаттар мен анықтамалар\n\
✅ Психологиялық тренингтер\n\
✅ Семинарлар мен курс бойынша сұрақтар\n\
✅ Авторлық бағдарлама бойынша кеңес (қандай идеялар тиімді)\n\
✅ Аттестаттау және анықтама алу жолдары\n\n\
📲 <b>Қалай байланысуға болады?</b>\n\
Төмендегі мәзірден қажетті бөлімді таңдаңыз немесе өтінім қалдырыңыз.\n\
Жауап 24 сағаттың ішінде беріледі.";

pub const MAIN_MENU: &str = "🏠 Төмендегі мәзірден қажетті бөлімді таңдаңыз:";
pub const FAQ_MENU: &str = "🤔 Қай бөлім бойынша сұрағыңыз бар?";
pub const FAQ_FALLBACK: &str = "Қате кетті...";

pub const NAME_PROMPT: &str = "📛 Атыңызды жазыңыз:";
pub const PHONE_PROMPT: &str = "📞 Телефон нөміріңізді жіберіңіз немесе түймені басыңыз:";
pub const MANUAL_PHONE_PROMPT: &str = "✍️ Телефон нөміріңізді жазыңыз (мысалы, +7 777 123 45 67):";
pub const QUESTION_PROMPT: &str = "📝 Сұрағыңызды толық сипаттап жазыңыз:";
pub const CONFIRMATION: &str = "✅ Рақмет! Сұранысыңыз жіберілді.";

pub const UNRECOGNIZED: &str = "🤷 Түсініксіз команда. Төмендегі мәзірді пайдаланыңыз.";
pub const MID_FORM_REMINDER: &str = "⚠️ Сіз өтінім толтырып жатырсыз. Жалғастырыңыз немесе /cancel арқылы тоқтатыңыз.";
pub const APOLOGY: &str = "😔 Кешіріңіз, қате орын алды. /start командасын жіберіп, қайта бастаңыз.";

/// Placeholder for a lead field that was never collected
pub const NOT_PROVIDED: &str = "көрсетілмеген";

pub const LEAD_HEADER: &str = "📥 <b>Жаңа өтінім!</b>";
pub const LEAD_NAME: &str = "👤 Аты:";
pub const LEAD_PHONE: &str = "📞 Телефон:";
pub const LEAD_QUESTION: &str = "📝 Сұрақ:";
pub const LEAD_WHATSAPP: &str = "📲 WhatsApp:";
