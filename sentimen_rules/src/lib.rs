//! Rules of informal Indonesian for Sentimen.
//!
//! This crate embeds the slang normalization dictionary and the stopword list used by the
//! default [`Preprocessor`].

use sentimen::errors::Result;
use sentimen::{NormalizationTable, Preprocessor, StopwordSet};

/// Slang words, abbreviations, and typos paired with their standard forms.
///
/// Some entries expand into several words.
pub const NORM_DICT: &[(&str, &str)] = &[
    ("yg", "yang"), ("blg", "bilang"), ("d", "di"), ("dket", "dekat"), ("deket", "dekat"),
    ("tak", "tidak"), ("tdk", "tidak"), ("ga", "tidak"), ("gak", "tidak"), ("gk", "tidak"),
    ("nggak", "tidak"), ("getu", "gitu"), ("duwit", "uang"), ("duit", "uang"), ("lh", "lah"),
    ("krn", "karena"), ("karna", "karena"), ("sdh", "sudah"), ("udh", "sudah"), ("blm", "belum"),
    ("dgn", "dengan"), ("dlm", "dalam"), ("jgn", "jangan"), ("pa", "apa"), ("bgt", "banget"),
    ("skrg", "sekarang"), ("sbelum", "sebelum"), ("bkn", "bukan"), ("utk", "untuk"),
    ("sy", "saya"), ("gue", "saya"), ("gw", "saya"), ("aku", "saya"), ("ku", "saya"),
    ("ndakjadi", "tidak jadi"), ("dobol", "bodoh"), ("bnyak", "banyak"), ("ngelesmu", "bohongmu"),
    ("bangss", "bangsa"), ("brp", "berapa"), ("nh", "nah"), ("km", "kamu"), ("lu", "kamu"),
    ("kta", "kita"), ("kalo", "kalau"), ("kl", "kalau"), ("berapq", "berapa"), ("tiap", "setiap"),
    ("mknya", "makanya"), ("edan", "gila"), ("kek", "kayak"), ("hrsnya", "harusnya"),
    ("peket", "paket"), ("tlol", "bodoh"), ("klau", "kalau"), ("klo", "kalau"), ("knp", "kenapa"),
    ("ksih", "kasih"), ("msh", "masih"), ("setop", "stop"), ("knmurid", "kemurid"),
    ("secuil", "sedikit"), ("kyk", "kayak"), ("spy", "supaya"), ("gmn", "gimana"), ("dah", "udah"),
    ("dl", "dulu"), ("sht", "sehat"), ("klu", "kalau"), ("bgus", "bagus"), ("krnpa", "kenapa"),
    ("jadivkepala", "jadi kepala"), ("slrh", "seluruh"), ("kepla", "kepala"),
    ("skolah", "sekolah"), ("bpk", "bapak"), ("smdgn", "sama dengan"), ("sing", "yang"),
    ("begonya", "bodohnya"), ("kluarganya", "keluarganya"), ("kya", "kayak"), ("merika", "mereka"),
    ("progrm", "program"), ("byk", "banyak"), ("cocog", "cocok"), ("bln", "bulan"),
    ("bp", "bapak"), ("tlng", "tolong"), ("dihntikn", "dihentikan"), ("tpi", "tapi"),
    ("tp", "tapi"), ("indo", "indonesia"), ("jd", "jadi"), ("bs", "bisa"), ("aja", "saja"),
    ("aj", "saja"), ("sj", "saja"), ("sja", "saja"), ("lbh", "lebih"), ("sm", "sama"),
    ("dr", "dari"), ("dri", "dari"), ("hrs", "harus"), ("pas", "saat"), ("tgl", "tanggal"),
    ("bnyk", "banyak"), ("mw", "mau"), ("tu", "itu"), ("samoai", "sampai"), ("knapa", "kenapa"),
    ("penerapnnya", "penerapannya"), ("cepolok", "ceplok"), ("semingu", "seminggu"),
    ("gimna", "gimana"), ("mf", "maaf"), ("doyan", "suka"), ("dg", "dengan"), ("rmh", "rumah"),
    ("umpetin", "disembunyikan"), ("anggean", "anggaran"), ("mubajir", "mubazir"),
    ("mlah", "malah"), ("lha", "lah"), ("cuannya", "uangnya"), ("dsar", "dasar"),
    ("mntal", "mental"), ("pjabat", "pejabat"), ("ngajarqw", "mengajarku"), ("mkn", "makan"),
    ("kenthang", "kentang"), ("iya", "ya"), ("trs", "terus"), ("koprupsi", "korupsi"),
    ("hrusnya", "harusnya"), ("bgtu", "begitu"), ("uda", "sudah"), ("mo", "mau"),
    ("engga", "tidak"), ("amburadul", "berantakan"), ("gpp", "tidak apa apa"), ("emang", "memang"),
    ("omprengx", "omprengnya"), ("sealot", "sekeras"), ("ajaa", "saja"), ("ntar", "nanti"),
    ("lgsg", "langsung"), ("bget", "banget"), ("nyari", "mencari"), ("bner", "benar"),
    ("ni", "ini"), ("mengdig", "mending"), ("mbgx", "mbgnya"), ("uagkan", "uangkan"),
    ("roar", "luar"), ("bagsa", "bangsa"), ("qt", "kita"), ("ubahla", "ubah lah"),
    ("ngmng", "berbicara"), ("doank", "saja"), ("vidio", "video"), ("cobak", "coba"),
    ("lgi", "lagi"), ("ortu", "orang tua"), ("itulah", "itu lah"), ("seharusx", "seharusnya"),
    ("cpt", "cepat"), ("ngeyel", "keras kepala"), ("pake", "pakai"), ("dpt", "dapat"),
    ("sblm", "sebelum"), ("ges", "teman teman"), ("bodih", "bodoh"), ("smoga", "semoga"),
    ("ajah", "saja"), ("wong", "orang"), ("yo", "ya"), ("iku", "itu"), ("makkin", "makin"),
    ("ramayi", "ramai"), ("giji", "gizi"), ("mantab", "mantap"), ("trus", "terus"),
    ("positfnya", "positifnya"), ("emng", "memang"), ("ank", "anak"), ("pda", "pada"),
    ("pucet", "pucat"), ("bat", "banget"), ("ky", "kayak"), ("pngen", "ingin"),
    ("ngeruk", "ambil"), ("akuu", "saya"), ("ny", "nya"), ("prbwo", "prabowo"), ("kagak", "tidak"),
    ("ngga", "tidak"), ("muke", "wajah"), ("nye", "nya"), ("rogram", "program"),
    ("cuan", "untung"), ("smw", "semua"), ("kyak", "kayak"), ("gtu", "gitu"),
    ("lwongan", "lowongan"), ("dikrm", "dikirim"), ("ne", "nya"), ("programx", "programnya"),
    ("spagety", "spageti"), ("gelem", "mau"), ("uwang", "uang"), ("kasi", "kasih"),
    ("bgm", "bagaimana"), ("cost", "pengeluaran"), ("gratisa", "gratis"), ("hargavl", "harga"),
    ("aing", "saya"), ("ngikutin", "mengikuti"), ("pegawe", "pegawai"), ("kaga", "tidak"),
    ("propokator", "provokator"), ("konslet", "korsleting"), ("nyampe", "sampai"),
    ("nemu", "menemukan"), ("kpl", "kepala"), ("nnti", "nanti"), ("sik", "sih"),
    ("nyalahin", "menyalahkan"), ("dipake", "dipakai"), ("masal", "massal"), ("pdhl", "padahal"),
    ("gua", "saya"), ("cm", "cuma"), ("bt", "buat"), ("utuk", "untuk"), ("dngan", "dengan"),
    ("nahhh", "nah"), ("competent", "kompeten"), ("peak", "bodoh"), ("ngicipi", "mencoba"),
    ("emak", "ibu"), ("emg", "memang"), ("slamanya", "selamanya"), ("smpe", "sampai"),
    ("kluarga", "keluarga"), ("ketolopan", "kebodohan"), ("trima", "terima"),
    ("disekolhan", "disekolahan"), ("kmi", "kami"), ("jln", "jalan"), ("tau", "mengerti"),
    ("tw", "mengerti"), ("pk", "pak"), ("pke", "pakai"), ("org", "orang"), ("mkan", "makan"),
    ("mbg", "makan bergizi gratis"),
];

/// Words carrying no sentiment.
///
/// "ada" is not included because it appears in negations such as "tidak ada".
pub const STOP_WORDS: &[&str] = &[
    "yang", "di", "ke", "dari", "dan", "atau", "ini", "itu", "juga", "nya", "saya", "aku", "kamu",
    "dia", "kita", "mereka", "pada", "dengan", "adalah", "yaitu", "karena", "untuk", "bagi",
    "bisa", "akan", "sudah", "lagi", "masih", "oleh", "saja", "kah", "pun", "jadi", "kalau",
    "tapi", "namun", "kok", "sih", "deh", "dong", "lah", "mah", "kan", "ya", "yak", "yuk", "tuh",
    "nih", "wah", "wow", "biar", "agar", "supaya", "lalu", "kemudian", "setelah", "sebelum", "lo",
    "saat", "ketika", "seperti", "bagaikan", "antara", "terhadap", "tentang", "si", "nah", "oh",
    "kayak", "lahh", "inimahh", "nyaa", "loh", "yah", "nahh", "jir", "njir", "dehh", "se", "waw",
    "wooow", "secara", "dalam", "luar", "atas", "bawah", "depan", "belakang", "sana", "sini",
];

/// Returns the normalization table built from [`NORM_DICT`].
///
/// # Errors
///
/// Fails only if [`NORM_DICT`] contains duplicate words.
pub fn normalization_table() -> Result<NormalizationTable> {
    NormalizationTable::new(NORM_DICT.iter().copied())
}

/// Returns the stopword set built from [`STOP_WORDS`].
pub fn stopword_set() -> StopwordSet {
    StopwordSet::new(STOP_WORDS.iter().copied())
}

/// Returns a preprocessor using the embedded rules.
///
/// # Examples
///
/// ```
/// let preprocessor = sentimen_rules::preprocessor().unwrap();
/// assert_eq!("tidak ada gunax", preprocessor.preprocess("yg gk ada gunax"));
/// ```
pub fn preprocessor() -> Result<Preprocessor> {
    Preprocessor::new(normalization_table()?, stopword_set())
}
