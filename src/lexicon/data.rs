//! Built-in word lists and conversion pairs.
//!
//! All entries are lowercase Latin transliterations. Short Hindi words that
//! collide with common English words ("to", "is", "the", "do", "so", "par")
//! are left out on purpose: the Indic lists win over the English dictionary.

/// Transliterated Hindi words.
pub const HINDI_WORDS: &[&str] = &[
    // Pronouns and possessives
    "main", "mai", "mera", "meri", "mere", "mujhe", "mujhko", "hum", "hamara", "hamari",
    "hamare", "humein", "tu", "tum", "tera", "teri", "tere", "tumhara", "tumhari", "tumhare",
    "tujhe", "tumhe", "tumhein", "aap", "aapka", "aapki", "aapke", "aapko", "yeh", "ye", "woh",
    "wo", "vo", "voh", "uska", "uski", "uske", "usko", "unka", "unki", "unke", "unko", "koi",
    "kuch", "sab", "sabhi",
    // Auxiliaries and verbs
    "hai", "hain", "tha", "thi", "thin", "ho", "hoga", "hogi", "honge", "hun", "hoon", "hu",
    "raha", "rahi", "rahe", "kar", "karo", "karna", "karta", "karti", "karte", "kiya", "kiye",
    "de", "diya", "dena", "le", "lo", "liya", "lena", "ja", "jaa", "jao", "jana", "jata",
    "jati", "gaya", "gayi", "gaye", "aa", "aao", "aana", "aaya", "aayi", "aaye", "mil",
    "milta", "milti", "milte", "milna", "dekh", "dekho", "dekha", "chal", "chalo", "chalna",
    "bol", "bolo", "bola", "suno", "sun", "samajh", "sakta", "sakti", "sakte", "chahiye",
    "pata", "rakh", "rakho", "baith", "baitho", "khao", "piyo",
    // Question words
    "kya", "kyun", "kyon", "kaise", "kaisa", "kaisi", "kahan", "kab", "kaun", "kitna",
    "kitni", "kitne", "kidhar",
    // Postpositions, conjunctions, particles
    "ka", "ki", "ke", "ko", "se", "mein", "pe", "tak", "wala", "wali", "wale", "liye", "aur",
    "bhi", "lekin", "magar", "kyunki", "agar", "toh", "phir", "fir", "nahi", "nahin", "na",
    "haan", "ji", "bas", "sirf", "abhi", "kabhi", "sabse", "bilkul",
    // Adjectives and adverbs
    "bahut", "bohot", "bahot", "accha", "acha", "achha", "achchha", "theek", "thik", "sahi",
    "galat", "thoda", "thodi", "zyada", "jyada", "bada", "badi", "chota", "choti", "jaldi",
    "der", "naya", "nayi", "purana", "sundar", "mast", "bekar", "kripya", "kripaya",
    // Nouns
    "aaj", "kal", "ghar", "kaam", "khana", "paani", "pani", "dost", "yaar", "bhai", "behen",
    "naam", "log", "din", "raat", "subah", "shaam", "pyaar", "dil", "zindagi", "duniya",
    "baat", "baatein", "waqt", "samay", "paisa", "paise", "sawal", "jawab", "khushi", "intezaar",
];

/// Transliterated Marathi words. Words shared with Hindi ("aaj", "kal",
/// "ghar", "nahi") are listed here too; the Hindi list takes priority.
pub const MARATHI_WORDS: &[&str] = &[
    // Pronouns and possessives
    "mi", "mala", "amhi", "aamhi", "apan", "aapan", "tu", "tula", "tumhi", "tumhala",
    "majha", "maza", "mazha", "majhi", "mazi", "majhe", "maze", "tujha", "tuza", "tujhi",
    "tuzi", "amcha", "aamcha", "tumcha", "tyacha", "tyachi", "ticha", "tichi", "tyala",
    "tila", "tyanna", "kuni", "kahi", "sagla", "sagle", "sagli",
    // Auxiliaries and verbs
    "aahe", "ahe", "aahes", "ahes", "aahet", "ahet", "aaho", "hota", "hoti", "hote", "hotas",
    "nahi", "nahiye", "naahi", "hoil", "jaat", "jato", "jate", "jaa", "yeto", "yete", "ye",
    "karto", "karte", "karu", "kar", "kela", "keli", "kele", "kelay", "zala", "jhala", "zali",
    "jhali", "zale", "gela", "geli", "gele", "aala", "aali", "aale", "bagh", "baghu",
    "baghitla", "sangitla", "sangto", "bolto", "pahije", "nako", "milel", "ghe", "ghya",
    "dya", "basa", "jevla", "jevlas", "khaato",
    // Question words
    "kay", "kaay", "kasa", "kashi", "kase", "kuthe", "kevha", "kon", "kiti", "ka",
    // Postpositions, conjunctions, particles
    "la", "var", "ya", "madhe", "madhye", "sathi", "pasun", "paryant", "ani", "aani", "pan",
    "mhanun", "mhanje", "tar", "hoy", "ho", "re", "ga", "na",
    // Adjectives and adverbs
    "khup", "chaan", "chan", "chhan", "bara", "barobar", "lavkar", "hallu", "thoda", "jast",
    "kami", "mothe", "motha", "lahan", "navin", "krupaya", "uttam", "chavishta",
    // Nouns and time words
    "aaj", "kal", "kaal", "udya", "aata", "ata", "ghar", "ghari", "jevan", "paani", "mitra",
    "kaam", "divas", "ratri", "sakali", "sandhyakali", "seva",
];

/// Common English words. Alphabetic words outside this list are still
/// classified English, with lower confidence.
pub const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "always", "am", "amazing", "an", "and",
    "any", "are", "as", "at", "back", "bad", "be", "beautiful", "because", "been", "before",
    "best", "better", "big", "book", "boss", "but", "by", "call", "can", "car", "class",
    "coffee", "college", "come", "could", "day", "delicious", "did", "do", "does", "done",
    "dont", "don't", "each", "eat", "engineer", "even", "every", "family", "fine", "first",
    "food", "for", "friend", "friends", "from", "function", "fun", "game", "get", "give",
    "go", "going", "good", "great", "had", "happy", "has", "have", "he", "hello", "her",
    "here", "hi", "him", "his", "home", "hot", "how", "i", "if", "in", "into", "is", "it",
    "its", "just", "know", "late", "later", "leave", "let", "like", "little", "long", "look",
    "love", "lunch", "make", "many", "me", "meeting", "money", "more", "morning", "movie",
    "much", "my", "name", "need", "never", "new", "nice", "night", "no", "not", "now", "of",
    "office", "ok", "okay", "on", "one", "only", "or", "other", "our", "out", "outside",
    "over", "party", "people", "phone", "plan", "please", "problem", "really", "restaurant",
    "right", "said", "say", "schedule", "school", "see", "service", "she", "should", "so",
    "some", "sorry", "still", "strong", "take", "tasty", "tell", "thanks", "that", "the",
    "their", "them", "then", "there", "they", "thing", "think", "this", "tight", "time",
    "to", "today", "tomorrow", "too", "traffic", "up", "us", "very", "wait", "waiting",
    "want", "was", "water", "way", "we", "weather", "well", "went", "were", "what", "when",
    "where", "which", "who", "why", "will", "with", "work", "would", "wrong", "yes", "yet",
    "you", "your",
];

/// `(hindi, english)` pairs, read in both directions. When several pairs
/// share a target word, the first one listed wins for the reverse lookup.
pub const HINDI_ENGLISH: &[(&str, &str)] = &[
    ("main", "I"),
    ("mujhe", "me"),
    ("mera", "my"),
    ("meri", "my"),
    ("mere", "my"),
    ("hum", "we"),
    ("hamara", "our"),
    ("tum", "you"),
    ("aap", "you"),
    ("tu", "you"),
    ("tumhara", "your"),
    ("tera", "your"),
    ("yeh", "this"),
    ("ye", "this"),
    ("woh", "that"),
    ("wo", "that"),
    ("hai", "is"),
    ("hain", "are"),
    ("ho", "are"),
    ("hun", "am"),
    ("hoon", "am"),
    ("tha", "was"),
    ("thi", "was"),
    ("kya", "what"),
    ("kyun", "why"),
    ("kyon", "why"),
    ("kaise", "how"),
    ("kahan", "where"),
    ("kab", "when"),
    ("kaun", "who"),
    ("nahi", "not"),
    ("nahin", "not"),
    ("naam", "name"),
    ("aur", "and"),
    ("bhi", "also"),
    ("lekin", "but"),
    ("agar", "if"),
    ("bahut", "very"),
    ("bohot", "very"),
    ("accha", "good"),
    ("acha", "good"),
    ("sundar", "beautiful"),
    ("mast", "great"),
    ("abhi", "now"),
    ("aaj", "today"),
    ("kal", "tomorrow"),
    ("ghar", "home"),
    ("kaam", "work"),
    ("khana", "food"),
    ("paani", "water"),
    ("dost", "friend"),
    ("sab", "all"),
    ("jaldi", "quickly"),
    ("phir", "then"),
    ("haan", "yes"),
    ("sahi", "right"),
    ("galat", "wrong"),
    ("log", "people"),
    ("din", "day"),
    ("raat", "night"),
    ("subah", "morning"),
    ("baat", "talk"),
    ("mein", "in"),
    ("ka", "of"),
    ("ke", "of"),
    ("ki", "of"),
    ("se", "from"),
    ("ko", "to"),
    ("liye", "for"),
    ("kripya", "please"),
    ("intezaar", "wait"),
    ("der", "late"),
];

/// `(marathi, english)` pairs.
pub const MARATHI_ENGLISH: &[(&str, &str)] = &[
    ("mi", "I"),
    ("mala", "me"),
    ("amhi", "we"),
    ("tumhi", "you"),
    ("tu", "you"),
    ("majha", "my"),
    ("maza", "my"),
    ("majhi", "my"),
    ("tujha", "your"),
    ("aahe", "is"),
    ("ahe", "is"),
    ("aahet", "are"),
    ("ahes", "are"),
    ("aahes", "are"),
    ("hota", "was"),
    ("hoti", "was"),
    ("nahi", "not"),
    ("khup", "very"),
    ("chaan", "nice"),
    ("chavishta", "tasty"),
    ("uttam", "great"),
    ("kay", "what"),
    ("kuthe", "where"),
    ("kevha", "when"),
    ("kon", "who"),
    ("kasa", "how"),
    ("jevan", "food"),
    ("ghari", "home"),
    ("aaj", "today"),
    ("udya", "tomorrow"),
    ("aata", "now"),
    ("ani", "and"),
    ("aani", "and"),
    ("pan", "but"),
    ("krupaya", "please"),
    ("seva", "service"),
    ("mitra", "friend"),
    ("divas", "day"),
    ("sakali", "morning"),
    ("la", "to"),
    ("var", "on"),
    ("madhe", "in"),
    ("ya", "come"),
    ("sagla", "all"),
    ("nako", "no"),
    ("hoy", "yes"),
    ("pahije", "want"),
    ("lavkar", "quickly"),
];

/// `(hindi, marathi)` pairs.
pub const HINDI_MARATHI: &[(&str, &str)] = &[
    ("hai", "aahe"),
    ("hain", "aahet"),
    ("tha", "hota"),
    ("thi", "hoti"),
    ("bahut", "khup"),
    ("accha", "chaan"),
    ("acha", "chaan"),
    ("kya", "kay"),
    ("kahan", "kuthe"),
    ("kab", "kevha"),
    ("kaun", "kon"),
    ("kaise", "kasa"),
    ("main", "mi"),
    ("mujhe", "mala"),
    ("mera", "majha"),
    ("meri", "majhi"),
    ("tum", "tumhi"),
    ("hum", "amhi"),
    ("aur", "ani"),
    ("lekin", "pan"),
    ("abhi", "aata"),
    ("khana", "jevan"),
    ("dost", "mitra"),
    ("kripya", "krupaya"),
    ("sab", "sagla"),
    ("mein", "madhe"),
    ("ko", "la"),
    ("liye", "sathi"),
    ("jaldi", "lavkar"),
    ("din", "divas"),
    ("subah", "sakali"),
    ("haan", "hoy"),
    ("chahiye", "pahije"),
];
