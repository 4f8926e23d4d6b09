//! ISO-639 language codes and names: validation of two- and three-letter
//! tags and English names, and equivalence under ISO-639-2 normalization.

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

struct Lang {
    /// ISO-639-1 two-letter code; empty for languages that have none.
    code1: &'static str,
    /// ISO-639-2 bibliographic three-letter code.
    code2: &'static str,
    /// ISO-639-2 terminology code, where it differs from the bibliographic
    /// one.
    code2t: &'static str,
    /// English name (several names are separated by "; ").
    name: &'static str,
}

/// The ISO-639-2 code list, carrying the ISO-639-1 correspondence where
/// one exists.
static LANGUAGES: &[Lang] = &[
    Lang { code1: "aa", code2: "aar", code2t: "", name: "Afar" },
    Lang { code1: "ab", code2: "abk", code2t: "", name: "Abkhazian" },
    Lang { code1: "", code2: "ace", code2t: "", name: "Achinese" },
    Lang { code1: "", code2: "ach", code2t: "", name: "Acoli" },
    Lang { code1: "", code2: "ada", code2t: "", name: "Adangme" },
    Lang { code1: "", code2: "ady", code2t: "", name: "Adyghe; Adygei" },
    Lang { code1: "", code2: "afa", code2t: "", name: "Afro-Asiatic languages" },
    Lang { code1: "", code2: "afh", code2t: "", name: "Afrihili" },
    Lang { code1: "af", code2: "afr", code2t: "", name: "Afrikaans" },
    Lang { code1: "", code2: "ain", code2t: "", name: "Ainu" },
    Lang { code1: "ak", code2: "aka", code2t: "", name: "Akan" },
    Lang { code1: "", code2: "akk", code2t: "", name: "Akkadian" },
    Lang { code1: "sq", code2: "alb", code2t: "sqi", name: "Albanian" },
    Lang { code1: "", code2: "ale", code2t: "", name: "Aleut" },
    Lang { code1: "", code2: "alg", code2t: "", name: "Algonquian languages" },
    Lang { code1: "", code2: "alt", code2t: "", name: "Southern Altai" },
    Lang { code1: "am", code2: "amh", code2t: "", name: "Amharic" },
    Lang { code1: "", code2: "ang", code2t: "", name: "English, Old (ca.450-1100)" },
    Lang { code1: "", code2: "anp", code2t: "", name: "Angika" },
    Lang { code1: "", code2: "apa", code2t: "", name: "Apache languages" },
    Lang { code1: "ar", code2: "ara", code2t: "", name: "Arabic" },
    Lang { code1: "", code2: "arc", code2t: "", name: "Official Aramaic (700-300 BCE); Imperial Aramaic (700-300 BCE)" },
    Lang { code1: "an", code2: "arg", code2t: "", name: "Aragonese" },
    Lang { code1: "hy", code2: "arm", code2t: "hye", name: "Armenian" },
    Lang { code1: "", code2: "arn", code2t: "", name: "Mapudungun; Mapuche" },
    Lang { code1: "", code2: "arp", code2t: "", name: "Arapaho" },
    Lang { code1: "", code2: "art", code2t: "", name: "Artificial languages" },
    Lang { code1: "", code2: "arw", code2t: "", name: "Arawak" },
    Lang { code1: "as", code2: "asm", code2t: "", name: "Assamese" },
    Lang { code1: "", code2: "ast", code2t: "", name: "Asturian; Bable; Leonese; Asturleonese" },
    Lang { code1: "", code2: "ath", code2t: "", name: "Athapascan languages" },
    Lang { code1: "", code2: "aus", code2t: "", name: "Australian languages" },
    Lang { code1: "av", code2: "ava", code2t: "", name: "Avaric" },
    Lang { code1: "ae", code2: "ave", code2t: "", name: "Avestan" },
    Lang { code1: "", code2: "awa", code2t: "", name: "Awadhi" },
    Lang { code1: "ay", code2: "aym", code2t: "", name: "Aymara" },
    Lang { code1: "az", code2: "aze", code2t: "", name: "Azerbaijani" },
    Lang { code1: "", code2: "bad", code2t: "", name: "Banda languages" },
    Lang { code1: "", code2: "bai", code2t: "", name: "Bamileke languages" },
    Lang { code1: "ba", code2: "bak", code2t: "", name: "Bashkir" },
    Lang { code1: "", code2: "bal", code2t: "", name: "Baluchi" },
    Lang { code1: "bm", code2: "bam", code2t: "", name: "Bambara" },
    Lang { code1: "", code2: "ban", code2t: "", name: "Balinese" },
    Lang { code1: "eu", code2: "baq", code2t: "eus", name: "Basque" },
    Lang { code1: "", code2: "bas", code2t: "", name: "Basa" },
    Lang { code1: "", code2: "bat", code2t: "", name: "Baltic languages" },
    Lang { code1: "", code2: "bej", code2t: "", name: "Beja; Bedawiyet" },
    Lang { code1: "be", code2: "bel", code2t: "", name: "Belarusian" },
    Lang { code1: "", code2: "bem", code2t: "", name: "Bemba" },
    Lang { code1: "bn", code2: "ben", code2t: "", name: "Bengali" },
    Lang { code1: "", code2: "ber", code2t: "", name: "Berber languages" },
    Lang { code1: "", code2: "bho", code2t: "", name: "Bhojpuri" },
    Lang { code1: "bh", code2: "bih", code2t: "", name: "Bihari languages" },
    Lang { code1: "", code2: "bik", code2t: "", name: "Bikol" },
    Lang { code1: "", code2: "bin", code2t: "", name: "Bini; Edo" },
    Lang { code1: "bi", code2: "bis", code2t: "", name: "Bislama" },
    Lang { code1: "", code2: "bla", code2t: "", name: "Siksika" },
    Lang { code1: "", code2: "bnt", code2t: "", name: "Bantu (Other)" },
    Lang { code1: "bs", code2: "bos", code2t: "", name: "Bosnian" },
    Lang { code1: "", code2: "bra", code2t: "", name: "Braj" },
    Lang { code1: "br", code2: "bre", code2t: "", name: "Breton" },
    Lang { code1: "", code2: "btk", code2t: "", name: "Batak languages" },
    Lang { code1: "", code2: "bua", code2t: "", name: "Buriat" },
    Lang { code1: "", code2: "bug", code2t: "", name: "Buginese" },
    Lang { code1: "bg", code2: "bul", code2t: "", name: "Bulgarian" },
    Lang { code1: "my", code2: "bur", code2t: "mya", name: "Burmese" },
    Lang { code1: "", code2: "byn", code2t: "", name: "Blin; Bilin" },
    Lang { code1: "", code2: "cad", code2t: "", name: "Caddo" },
    Lang { code1: "", code2: "cai", code2t: "", name: "Central American Indian languages" },
    Lang { code1: "", code2: "car", code2t: "", name: "Galibi Carib" },
    Lang { code1: "ca", code2: "cat", code2t: "", name: "Catalan; Valencian" },
    Lang { code1: "", code2: "cau", code2t: "", name: "Caucasian languages" },
    Lang { code1: "", code2: "ceb", code2t: "", name: "Cebuano" },
    Lang { code1: "", code2: "cel", code2t: "", name: "Celtic languages" },
    Lang { code1: "ch", code2: "cha", code2t: "", name: "Chamorro" },
    Lang { code1: "", code2: "chb", code2t: "", name: "Chibcha" },
    Lang { code1: "ce", code2: "che", code2t: "", name: "Chechen" },
    Lang { code1: "", code2: "chg", code2t: "", name: "Chagatai" },
    Lang { code1: "zh", code2: "chi", code2t: "zho", name: "Chinese" },
    Lang { code1: "", code2: "chk", code2t: "", name: "Chuukese" },
    Lang { code1: "", code2: "chm", code2t: "", name: "Mari" },
    Lang { code1: "", code2: "chn", code2t: "", name: "Chinook jargon" },
    Lang { code1: "", code2: "cho", code2t: "", name: "Choctaw" },
    Lang { code1: "", code2: "chp", code2t: "", name: "Chipewyan; Dene Suline" },
    Lang { code1: "", code2: "chr", code2t: "", name: "Cherokee" },
    Lang { code1: "cu", code2: "chu", code2t: "", name: "Church Slavic; Old Slavonic; Church Slavonic; Old Bulgarian; Old Church Slavonic" },
    Lang { code1: "cv", code2: "chv", code2t: "", name: "Chuvash" },
    Lang { code1: "", code2: "chy", code2t: "", name: "Cheyenne" },
    Lang { code1: "", code2: "cmc", code2t: "", name: "Chamic languages" },
    Lang { code1: "", code2: "cop", code2t: "", name: "Coptic" },
    Lang { code1: "kw", code2: "cor", code2t: "", name: "Cornish" },
    Lang { code1: "co", code2: "cos", code2t: "", name: "Corsican" },
    Lang { code1: "", code2: "cpe", code2t: "", name: "Creoles and pidgins, English based" },
    Lang { code1: "", code2: "cpf", code2t: "", name: "Creoles and pidgins, French-based " },
    Lang { code1: "", code2: "cpp", code2t: "", name: "Creoles and pidgins, Portuguese-based " },
    Lang { code1: "cr", code2: "cre", code2t: "", name: "Cree" },
    Lang { code1: "", code2: "crh", code2t: "", name: "Crimean Tatar; Crimean Turkish" },
    Lang { code1: "", code2: "crp", code2t: "", name: "Creoles and pidgins " },
    Lang { code1: "", code2: "csb", code2t: "", name: "Kashubian" },
    Lang { code1: "", code2: "cus", code2t: "", name: "Cushitic languages" },
    Lang { code1: "cs", code2: "cze", code2t: "ces", name: "Czech" },
    Lang { code1: "", code2: "dak", code2t: "", name: "Dakota" },
    Lang { code1: "da", code2: "dan", code2t: "", name: "Danish" },
    Lang { code1: "", code2: "dar", code2t: "", name: "Dargwa" },
    Lang { code1: "", code2: "day", code2t: "", name: "Land Dayak languages" },
    Lang { code1: "", code2: "del", code2t: "", name: "Delaware" },
    Lang { code1: "", code2: "den", code2t: "", name: "Slave (Athapascan)" },
    Lang { code1: "", code2: "dgr", code2t: "", name: "Dogrib" },
    Lang { code1: "", code2: "din", code2t: "", name: "Dinka" },
    Lang { code1: "dv", code2: "div", code2t: "", name: "Divehi; Dhivehi; Maldivian" },
    Lang { code1: "", code2: "doi", code2t: "", name: "Dogri" },
    Lang { code1: "", code2: "dra", code2t: "", name: "Dravidian languages" },
    Lang { code1: "", code2: "dsb", code2t: "", name: "Lower Sorbian" },
    Lang { code1: "", code2: "dua", code2t: "", name: "Duala" },
    Lang { code1: "", code2: "dum", code2t: "", name: "Dutch, Middle (ca.1050-1350)" },
    Lang { code1: "nl", code2: "dut", code2t: "nld", name: "Dutch; Flemish" },
    Lang { code1: "", code2: "dyu", code2t: "", name: "Dyula" },
    Lang { code1: "dz", code2: "dzo", code2t: "", name: "Dzongkha" },
    Lang { code1: "", code2: "efi", code2t: "", name: "Efik" },
    Lang { code1: "", code2: "egy", code2t: "", name: "Egyptian (Ancient)" },
    Lang { code1: "", code2: "eka", code2t: "", name: "Ekajuk" },
    Lang { code1: "", code2: "elx", code2t: "", name: "Elamite" },
    Lang { code1: "en", code2: "eng", code2t: "", name: "English" },
    Lang { code1: "", code2: "enm", code2t: "", name: "English, Middle (1100-1500)" },
    Lang { code1: "eo", code2: "epo", code2t: "", name: "Esperanto" },
    Lang { code1: "et", code2: "est", code2t: "", name: "Estonian" },
    Lang { code1: "ee", code2: "ewe", code2t: "", name: "Ewe" },
    Lang { code1: "", code2: "ewo", code2t: "", name: "Ewondo" },
    Lang { code1: "", code2: "fan", code2t: "", name: "Fang" },
    Lang { code1: "fo", code2: "fao", code2t: "", name: "Faroese" },
    Lang { code1: "", code2: "fat", code2t: "", name: "Fanti" },
    Lang { code1: "fj", code2: "fij", code2t: "", name: "Fijian" },
    Lang { code1: "", code2: "fil", code2t: "", name: "Filipino; Pilipino" },
    Lang { code1: "fi", code2: "fin", code2t: "", name: "Finnish" },
    Lang { code1: "", code2: "fiu", code2t: "", name: "Finno-Ugrian languages" },
    Lang { code1: "", code2: "fon", code2t: "", name: "Fon" },
    Lang { code1: "fr", code2: "fre", code2t: "fra", name: "French" },
    Lang { code1: "", code2: "frm", code2t: "", name: "French, Middle (ca.1400-1600)" },
    Lang { code1: "", code2: "fro", code2t: "", name: "French, Old (842-ca.1400)" },
    Lang { code1: "", code2: "frr", code2t: "", name: "Northern Frisian" },
    Lang { code1: "", code2: "frs", code2t: "", name: "Eastern Frisian" },
    Lang { code1: "fy", code2: "fry", code2t: "", name: "Western Frisian" },
    Lang { code1: "ff", code2: "ful", code2t: "", name: "Fulah" },
    Lang { code1: "", code2: "fur", code2t: "", name: "Friulian" },
    Lang { code1: "", code2: "gaa", code2t: "", name: "Ga" },
    Lang { code1: "", code2: "gay", code2t: "", name: "Gayo" },
    Lang { code1: "", code2: "gba", code2t: "", name: "Gbaya" },
    Lang { code1: "", code2: "gem", code2t: "", name: "Germanic languages" },
    Lang { code1: "ka", code2: "geo", code2t: "kat", name: "Georgian" },
    Lang { code1: "de", code2: "ger", code2t: "deu", name: "German" },
    Lang { code1: "", code2: "gez", code2t: "", name: "Geez" },
    Lang { code1: "", code2: "gil", code2t: "", name: "Gilbertese" },
    Lang { code1: "gd", code2: "gla", code2t: "", name: "Gaelic; Scottish Gaelic" },
    Lang { code1: "ga", code2: "gle", code2t: "", name: "Irish" },
    Lang { code1: "gl", code2: "glg", code2t: "", name: "Galician" },
    Lang { code1: "gv", code2: "glv", code2t: "", name: "Manx" },
    Lang { code1: "", code2: "gmh", code2t: "", name: "German, Middle High (ca.1050-1500)" },
    Lang { code1: "", code2: "goh", code2t: "", name: "German, Old High (ca.750-1050)" },
    Lang { code1: "", code2: "gon", code2t: "", name: "Gondi" },
    Lang { code1: "", code2: "gor", code2t: "", name: "Gorontalo" },
    Lang { code1: "", code2: "got", code2t: "", name: "Gothic" },
    Lang { code1: "", code2: "grb", code2t: "", name: "Grebo" },
    Lang { code1: "", code2: "grc", code2t: "", name: "Greek, Ancient (to 1453)" },
    Lang { code1: "el", code2: "gre", code2t: "ell", name: "Greek, Modern (1453-)" },
    Lang { code1: "gn", code2: "grn", code2t: "", name: "Guarani" },
    Lang { code1: "", code2: "gsw", code2t: "", name: "Swiss German; Alemannic; Alsatian" },
    Lang { code1: "gu", code2: "guj", code2t: "", name: "Gujarati" },
    Lang { code1: "", code2: "gwi", code2t: "", name: "Gwich'in" },
    Lang { code1: "", code2: "hai", code2t: "", name: "Haida" },
    Lang { code1: "ht", code2: "hat", code2t: "", name: "Haitian; Haitian Creole" },
    Lang { code1: "ha", code2: "hau", code2t: "", name: "Hausa" },
    Lang { code1: "", code2: "haw", code2t: "", name: "Hawaiian" },
    Lang { code1: "he", code2: "heb", code2t: "", name: "Hebrew" },
    Lang { code1: "hz", code2: "her", code2t: "", name: "Herero" },
    Lang { code1: "", code2: "hil", code2t: "", name: "Hiligaynon" },
    Lang { code1: "", code2: "him", code2t: "", name: "Himachali languages; Western Pahari languages" },
    Lang { code1: "hi", code2: "hin", code2t: "", name: "Hindi" },
    Lang { code1: "", code2: "hit", code2t: "", name: "Hittite" },
    Lang { code1: "", code2: "hmn", code2t: "", name: "Hmong; Mong" },
    Lang { code1: "ho", code2: "hmo", code2t: "", name: "Hiri Motu" },
    Lang { code1: "hr", code2: "hrv", code2t: "", name: "Croatian" },
    Lang { code1: "", code2: "hsb", code2t: "", name: "Upper Sorbian" },
    Lang { code1: "hu", code2: "hun", code2t: "", name: "Hungarian" },
    Lang { code1: "", code2: "hup", code2t: "", name: "Hupa" },
    Lang { code1: "", code2: "iba", code2t: "", name: "Iban" },
    Lang { code1: "ig", code2: "ibo", code2t: "", name: "Igbo" },
    Lang { code1: "is", code2: "ice", code2t: "isl", name: "Icelandic" },
    Lang { code1: "io", code2: "ido", code2t: "", name: "Ido" },
    Lang { code1: "ii", code2: "iii", code2t: "", name: "Sichuan Yi; Nuosu" },
    Lang { code1: "", code2: "ijo", code2t: "", name: "Ijo languages" },
    Lang { code1: "iu", code2: "iku", code2t: "", name: "Inuktitut" },
    Lang { code1: "ie", code2: "ile", code2t: "", name: "Interlingue; Occidental" },
    Lang { code1: "", code2: "ilo", code2t: "", name: "Iloko" },
    Lang { code1: "ia", code2: "ina", code2t: "", name: "Interlingua (International Auxiliary Language Association)" },
    Lang { code1: "", code2: "inc", code2t: "", name: "Indic languages" },
    Lang { code1: "id", code2: "ind", code2t: "", name: "Indonesian" },
    Lang { code1: "", code2: "ine", code2t: "", name: "Indo-European languages" },
    Lang { code1: "", code2: "inh", code2t: "", name: "Ingush" },
    Lang { code1: "ik", code2: "ipk", code2t: "", name: "Inupiaq" },
    Lang { code1: "", code2: "ira", code2t: "", name: "Iranian languages" },
    Lang { code1: "", code2: "iro", code2t: "", name: "Iroquoian languages" },
    Lang { code1: "it", code2: "ita", code2t: "", name: "Italian" },
    Lang { code1: "jv", code2: "jav", code2t: "", name: "Javanese" },
    Lang { code1: "", code2: "jbo", code2t: "", name: "Lojban" },
    Lang { code1: "ja", code2: "jpn", code2t: "", name: "Japanese" },
    Lang { code1: "", code2: "jpr", code2t: "", name: "Judeo-Persian" },
    Lang { code1: "", code2: "jrb", code2t: "", name: "Judeo-Arabic" },
    Lang { code1: "", code2: "kaa", code2t: "", name: "Kara-Kalpak" },
    Lang { code1: "", code2: "kab", code2t: "", name: "Kabyle" },
    Lang { code1: "", code2: "kac", code2t: "", name: "Kachin; Jingpho" },
    Lang { code1: "kl", code2: "kal", code2t: "", name: "Kalaallisut; Greenlandic" },
    Lang { code1: "", code2: "kam", code2t: "", name: "Kamba" },
    Lang { code1: "kn", code2: "kan", code2t: "", name: "Kannada" },
    Lang { code1: "", code2: "kar", code2t: "", name: "Karen languages" },
    Lang { code1: "ks", code2: "kas", code2t: "", name: "Kashmiri" },
    Lang { code1: "kr", code2: "kau", code2t: "", name: "Kanuri" },
    Lang { code1: "", code2: "kaw", code2t: "", name: "Kawi" },
    Lang { code1: "kk", code2: "kaz", code2t: "", name: "Kazakh" },
    Lang { code1: "", code2: "kbd", code2t: "", name: "Kabardian" },
    Lang { code1: "", code2: "kha", code2t: "", name: "Khasi" },
    Lang { code1: "", code2: "khi", code2t: "", name: "Khoisan languages" },
    Lang { code1: "km", code2: "khm", code2t: "", name: "Central Khmer" },
    Lang { code1: "", code2: "kho", code2t: "", name: "Khotanese; Sakan" },
    Lang { code1: "ki", code2: "kik", code2t: "", name: "Kikuyu; Gikuyu" },
    Lang { code1: "rw", code2: "kin", code2t: "", name: "Kinyarwanda" },
    Lang { code1: "ky", code2: "kir", code2t: "", name: "Kirghiz; Kyrgyz" },
    Lang { code1: "", code2: "kmb", code2t: "", name: "Kimbundu" },
    Lang { code1: "", code2: "kok", code2t: "", name: "Konkani" },
    Lang { code1: "kv", code2: "kom", code2t: "", name: "Komi" },
    Lang { code1: "kg", code2: "kon", code2t: "", name: "Kongo" },
    Lang { code1: "ko", code2: "kor", code2t: "", name: "Korean" },
    Lang { code1: "", code2: "kos", code2t: "", name: "Kosraean" },
    Lang { code1: "", code2: "kpe", code2t: "", name: "Kpelle" },
    Lang { code1: "", code2: "krc", code2t: "", name: "Karachay-Balkar" },
    Lang { code1: "", code2: "krl", code2t: "", name: "Karelian" },
    Lang { code1: "", code2: "kro", code2t: "", name: "Kru languages" },
    Lang { code1: "", code2: "kru", code2t: "", name: "Kurukh" },
    Lang { code1: "kj", code2: "kua", code2t: "", name: "Kuanyama; Kwanyama" },
    Lang { code1: "", code2: "kum", code2t: "", name: "Kumyk" },
    Lang { code1: "ku", code2: "kur", code2t: "", name: "Kurdish" },
    Lang { code1: "", code2: "kut", code2t: "", name: "Kutenai" },
    Lang { code1: "", code2: "lad", code2t: "", name: "Ladino" },
    Lang { code1: "", code2: "lah", code2t: "", name: "Lahnda" },
    Lang { code1: "", code2: "lam", code2t: "", name: "Lamba" },
    Lang { code1: "lo", code2: "lao", code2t: "", name: "Lao" },
    Lang { code1: "la", code2: "lat", code2t: "", name: "Latin" },
    Lang { code1: "lv", code2: "lav", code2t: "", name: "Latvian" },
    Lang { code1: "", code2: "lez", code2t: "", name: "Lezghian" },
    Lang { code1: "li", code2: "lim", code2t: "", name: "Limburgan; Limburger; Limburgish" },
    Lang { code1: "ln", code2: "lin", code2t: "", name: "Lingala" },
    Lang { code1: "lt", code2: "lit", code2t: "", name: "Lithuanian" },
    Lang { code1: "", code2: "lol", code2t: "", name: "Mongo" },
    Lang { code1: "", code2: "loz", code2t: "", name: "Lozi" },
    Lang { code1: "lb", code2: "ltz", code2t: "", name: "Luxembourgish; Letzeburgesch" },
    Lang { code1: "", code2: "lua", code2t: "", name: "Luba-Lulua" },
    Lang { code1: "lu", code2: "lub", code2t: "", name: "Luba-Katanga" },
    Lang { code1: "lg", code2: "lug", code2t: "", name: "Ganda" },
    Lang { code1: "", code2: "lui", code2t: "", name: "Luiseno" },
    Lang { code1: "", code2: "lun", code2t: "", name: "Lunda" },
    Lang { code1: "", code2: "luo", code2t: "", name: "Luo (Kenya and Tanzania)" },
    Lang { code1: "", code2: "lus", code2t: "", name: "Lushai" },
    Lang { code1: "mk", code2: "mac", code2t: "mkd", name: "Macedonian" },
    Lang { code1: "", code2: "mad", code2t: "", name: "Madurese" },
    Lang { code1: "", code2: "mag", code2t: "", name: "Magahi" },
    Lang { code1: "mh", code2: "mah", code2t: "", name: "Marshallese" },
    Lang { code1: "", code2: "mai", code2t: "", name: "Maithili" },
    Lang { code1: "", code2: "mak", code2t: "", name: "Makasar" },
    Lang { code1: "ml", code2: "mal", code2t: "", name: "Malayalam" },
    Lang { code1: "", code2: "man", code2t: "", name: "Mandingo" },
    Lang { code1: "mi", code2: "mao", code2t: "mri", name: "Maori" },
    Lang { code1: "", code2: "map", code2t: "", name: "Austronesian languages" },
    Lang { code1: "mr", code2: "mar", code2t: "", name: "Marathi" },
    Lang { code1: "", code2: "mas", code2t: "", name: "Masai" },
    Lang { code1: "ms", code2: "may", code2t: "msa", name: "Malay" },
    Lang { code1: "", code2: "mdf", code2t: "", name: "Moksha" },
    Lang { code1: "", code2: "mdr", code2t: "", name: "Mandar" },
    Lang { code1: "", code2: "men", code2t: "", name: "Mende" },
    Lang { code1: "", code2: "mga", code2t: "", name: "Irish, Middle (900-1200)" },
    Lang { code1: "", code2: "mic", code2t: "", name: "Mi'kmaq; Micmac" },
    Lang { code1: "", code2: "min", code2t: "", name: "Minangkabau" },
    Lang { code1: "", code2: "mis", code2t: "", name: "Uncoded languages" },
    Lang { code1: "", code2: "mkh", code2t: "", name: "Mon-Khmer languages" },
    Lang { code1: "mg", code2: "mlg", code2t: "", name: "Malagasy" },
    Lang { code1: "mt", code2: "mlt", code2t: "", name: "Maltese" },
    Lang { code1: "", code2: "mnc", code2t: "", name: "Manchu" },
    Lang { code1: "", code2: "mni", code2t: "", name: "Manipuri" },
    Lang { code1: "", code2: "mno", code2t: "", name: "Manobo languages" },
    Lang { code1: "", code2: "moh", code2t: "", name: "Mohawk" },
    Lang { code1: "mn", code2: "mon", code2t: "", name: "Mongolian" },
    Lang { code1: "", code2: "mos", code2t: "", name: "Mossi" },
    Lang { code1: "", code2: "mul", code2t: "", name: "Multiple languages" },
    Lang { code1: "", code2: "mun", code2t: "", name: "Munda languages" },
    Lang { code1: "", code2: "mus", code2t: "", name: "Creek" },
    Lang { code1: "", code2: "mwl", code2t: "", name: "Mirandese" },
    Lang { code1: "", code2: "mwr", code2t: "", name: "Marwari" },
    Lang { code1: "", code2: "myn", code2t: "", name: "Mayan languages" },
    Lang { code1: "", code2: "myv", code2t: "", name: "Erzya" },
    Lang { code1: "", code2: "nah", code2t: "", name: "Nahuatl languages" },
    Lang { code1: "", code2: "nai", code2t: "", name: "North American Indian languages" },
    Lang { code1: "", code2: "nap", code2t: "", name: "Neapolitan" },
    Lang { code1: "na", code2: "nau", code2t: "", name: "Nauru" },
    Lang { code1: "nv", code2: "nav", code2t: "", name: "Navajo; Navaho" },
    Lang { code1: "nr", code2: "nbl", code2t: "", name: "Ndebele, South; South Ndebele" },
    Lang { code1: "nd", code2: "nde", code2t: "", name: "Ndebele, North; North Ndebele" },
    Lang { code1: "ng", code2: "ndo", code2t: "", name: "Ndonga" },
    Lang { code1: "", code2: "nds", code2t: "", name: "Low German; Low Saxon; German, Low; Saxon, Low" },
    Lang { code1: "ne", code2: "nep", code2t: "", name: "Nepali" },
    Lang { code1: "", code2: "new", code2t: "", name: "Nepal Bhasa; Newari" },
    Lang { code1: "", code2: "nia", code2t: "", name: "Nias" },
    Lang { code1: "", code2: "nic", code2t: "", name: "Niger-Kordofanian languages" },
    Lang { code1: "", code2: "niu", code2t: "", name: "Niuean" },
    Lang { code1: "nn", code2: "nno", code2t: "", name: "Norwegian Nynorsk; Nynorsk, Norwegian" },
    Lang { code1: "nb", code2: "nob", code2t: "", name: "Bokmål, Norwegian; Norwegian Bokmål" },
    Lang { code1: "", code2: "nog", code2t: "", name: "Nogai" },
    Lang { code1: "", code2: "non", code2t: "", name: "Norse, Old" },
    Lang { code1: "no", code2: "nor", code2t: "", name: "Norwegian" },
    Lang { code1: "", code2: "nqo", code2t: "", name: "N'Ko" },
    Lang { code1: "", code2: "nso", code2t: "", name: "Pedi; Sepedi; Northern Sotho" },
    Lang { code1: "", code2: "nub", code2t: "", name: "Nubian languages" },
    Lang { code1: "", code2: "nwc", code2t: "", name: "Classical Newari; Old Newari; Classical Nepal Bhasa" },
    Lang { code1: "ny", code2: "nya", code2t: "", name: "Chichewa; Chewa; Nyanja" },
    Lang { code1: "", code2: "nym", code2t: "", name: "Nyamwezi" },
    Lang { code1: "", code2: "nyn", code2t: "", name: "Nyankole" },
    Lang { code1: "", code2: "nyo", code2t: "", name: "Nyoro" },
    Lang { code1: "", code2: "nzi", code2t: "", name: "Nzima" },
    Lang { code1: "oc", code2: "oci", code2t: "", name: "Occitan (post 1500); Provençal" },
    Lang { code1: "oj", code2: "oji", code2t: "", name: "Ojibwa" },
    Lang { code1: "or", code2: "ori", code2t: "", name: "Oriya" },
    Lang { code1: "om", code2: "orm", code2t: "", name: "Oromo" },
    Lang { code1: "", code2: "osa", code2t: "", name: "Osage" },
    Lang { code1: "os", code2: "oss", code2t: "", name: "Ossetian; Ossetic" },
    Lang { code1: "", code2: "ota", code2t: "", name: "Turkish, Ottoman (1500-1928)" },
    Lang { code1: "", code2: "oto", code2t: "", name: "Otomian languages" },
    Lang { code1: "", code2: "paa", code2t: "", name: "Papuan languages" },
    Lang { code1: "", code2: "pag", code2t: "", name: "Pangasinan" },
    Lang { code1: "", code2: "pal", code2t: "", name: "Pahlavi" },
    Lang { code1: "", code2: "pam", code2t: "", name: "Pampanga; Kapampangan" },
    Lang { code1: "pa", code2: "pan", code2t: "", name: "Panjabi; Punjabi" },
    Lang { code1: "", code2: "pap", code2t: "", name: "Papiamento" },
    Lang { code1: "", code2: "pau", code2t: "", name: "Palauan" },
    Lang { code1: "", code2: "peo", code2t: "", name: "Persian, Old (ca.600-400 B.C.)" },
    Lang { code1: "fa", code2: "per", code2t: "fas", name: "Persian" },
    Lang { code1: "", code2: "phi", code2t: "", name: "Philippine languages" },
    Lang { code1: "", code2: "phn", code2t: "", name: "Phoenician" },
    Lang { code1: "pi", code2: "pli", code2t: "", name: "Pali" },
    Lang { code1: "pl", code2: "pol", code2t: "", name: "Polish" },
    Lang { code1: "", code2: "pon", code2t: "", name: "Pohnpeian" },
    Lang { code1: "pt", code2: "por", code2t: "", name: "Portuguese" },
    Lang { code1: "", code2: "pra", code2t: "", name: "Prakrit languages" },
    Lang { code1: "", code2: "pro", code2t: "", name: "Provençal, Old (to 1500)" },
    Lang { code1: "ps", code2: "pus", code2t: "", name: "Pushto; Pashto" },
    Lang { code1: "", code2: "qaa-qtz", code2t: "", name: "Reserved for local use" },
    Lang { code1: "qu", code2: "que", code2t: "", name: "Quechua" },
    Lang { code1: "", code2: "raj", code2t: "", name: "Rajasthani" },
    Lang { code1: "", code2: "rap", code2t: "", name: "Rapanui" },
    Lang { code1: "", code2: "rar", code2t: "", name: "Rarotongan; Cook Islands Maori" },
    Lang { code1: "", code2: "roa", code2t: "", name: "Romance languages" },
    Lang { code1: "rm", code2: "roh", code2t: "", name: "Romansh" },
    Lang { code1: "", code2: "rom", code2t: "", name: "Romany" },
    Lang { code1: "ro", code2: "rum", code2t: "ron", name: "Romanian; Moldavian; Moldovan" },
    Lang { code1: "rn", code2: "run", code2t: "", name: "Rundi" },
    Lang { code1: "", code2: "rup", code2t: "", name: "Aromanian; Arumanian; Macedo-Romanian" },
    Lang { code1: "ru", code2: "rus", code2t: "", name: "Russian" },
    Lang { code1: "", code2: "sad", code2t: "", name: "Sandawe" },
    Lang { code1: "sg", code2: "sag", code2t: "", name: "Sango" },
    Lang { code1: "", code2: "sah", code2t: "", name: "Yakut" },
    Lang { code1: "", code2: "sai", code2t: "", name: "South American Indian (Other)" },
    Lang { code1: "", code2: "sal", code2t: "", name: "Salishan languages" },
    Lang { code1: "", code2: "sam", code2t: "", name: "Samaritan Aramaic" },
    Lang { code1: "sa", code2: "san", code2t: "", name: "Sanskrit" },
    Lang { code1: "", code2: "sas", code2t: "", name: "Sasak" },
    Lang { code1: "", code2: "sat", code2t: "", name: "Santali" },
    Lang { code1: "", code2: "scn", code2t: "", name: "Sicilian" },
    Lang { code1: "", code2: "sco", code2t: "", name: "Scots" },
    Lang { code1: "", code2: "sel", code2t: "", name: "Selkup" },
    Lang { code1: "", code2: "sem", code2t: "", name: "Semitic languages" },
    Lang { code1: "", code2: "sga", code2t: "", name: "Irish, Old (to 900)" },
    Lang { code1: "", code2: "sgn", code2t: "", name: "Sign Languages" },
    Lang { code1: "", code2: "shn", code2t: "", name: "Shan" },
    Lang { code1: "", code2: "sid", code2t: "", name: "Sidamo" },
    Lang { code1: "si", code2: "sin", code2t: "", name: "Sinhala; Sinhalese" },
    Lang { code1: "", code2: "sio", code2t: "", name: "Siouan languages" },
    Lang { code1: "", code2: "sit", code2t: "", name: "Sino-Tibetan languages" },
    Lang { code1: "", code2: "sla", code2t: "", name: "Slavic languages" },
    Lang { code1: "sk", code2: "slo", code2t: "slk", name: "Slovak" },
    Lang { code1: "sl", code2: "slv", code2t: "", name: "Slovenian" },
    Lang { code1: "", code2: "sma", code2t: "", name: "Southern Sami" },
    Lang { code1: "se", code2: "sme", code2t: "", name: "Northern Sami" },
    Lang { code1: "", code2: "smi", code2t: "", name: "Sami languages" },
    Lang { code1: "", code2: "smj", code2t: "", name: "Lule Sami" },
    Lang { code1: "", code2: "smn", code2t: "", name: "Inari Sami" },
    Lang { code1: "sm", code2: "smo", code2t: "", name: "Samoan" },
    Lang { code1: "", code2: "sms", code2t: "", name: "Skolt Sami" },
    Lang { code1: "sn", code2: "sna", code2t: "", name: "Shona" },
    Lang { code1: "sd", code2: "snd", code2t: "", name: "Sindhi" },
    Lang { code1: "", code2: "snk", code2t: "", name: "Soninke" },
    Lang { code1: "", code2: "sog", code2t: "", name: "Sogdian" },
    Lang { code1: "so", code2: "som", code2t: "", name: "Somali" },
    Lang { code1: "", code2: "son", code2t: "", name: "Songhai languages" },
    Lang { code1: "st", code2: "sot", code2t: "", name: "Sotho, Southern" },
    Lang { code1: "es", code2: "spa", code2t: "", name: "Spanish; Castilian" },
    Lang { code1: "sc", code2: "srd", code2t: "", name: "Sardinian" },
    Lang { code1: "", code2: "srn", code2t: "", name: "Sranan Tongo" },
    Lang { code1: "sr", code2: "srp", code2t: "", name: "Serbian" },
    Lang { code1: "", code2: "srr", code2t: "", name: "Serer" },
    Lang { code1: "", code2: "ssa", code2t: "", name: "Nilo-Saharan languages" },
    Lang { code1: "ss", code2: "ssw", code2t: "", name: "Swati" },
    Lang { code1: "", code2: "suk", code2t: "", name: "Sukuma" },
    Lang { code1: "su", code2: "sun", code2t: "", name: "Sundanese" },
    Lang { code1: "", code2: "sus", code2t: "", name: "Susu" },
    Lang { code1: "", code2: "sux", code2t: "", name: "Sumerian" },
    Lang { code1: "sw", code2: "swa", code2t: "", name: "Swahili" },
    Lang { code1: "sv", code2: "swe", code2t: "", name: "Swedish" },
    Lang { code1: "", code2: "syc", code2t: "", name: "Classical Syriac" },
    Lang { code1: "", code2: "syr", code2t: "", name: "Syriac" },
    Lang { code1: "ty", code2: "tah", code2t: "", name: "Tahitian" },
    Lang { code1: "", code2: "tai", code2t: "", name: "Tai languages" },
    Lang { code1: "ta", code2: "tam", code2t: "", name: "Tamil" },
    Lang { code1: "tt", code2: "tat", code2t: "", name: "Tatar" },
    Lang { code1: "te", code2: "tel", code2t: "", name: "Telugu" },
    Lang { code1: "", code2: "tem", code2t: "", name: "Timne" },
    Lang { code1: "", code2: "ter", code2t: "", name: "Tereno" },
    Lang { code1: "", code2: "tet", code2t: "", name: "Tetum" },
    Lang { code1: "tg", code2: "tgk", code2t: "", name: "Tajik" },
    Lang { code1: "tl", code2: "tgl", code2t: "", name: "Tagalog" },
    Lang { code1: "th", code2: "tha", code2t: "", name: "Thai" },
    Lang { code1: "bo", code2: "tib", code2t: "bod", name: "Tibetan" },
    Lang { code1: "", code2: "tig", code2t: "", name: "Tigre" },
    Lang { code1: "ti", code2: "tir", code2t: "", name: "Tigrinya" },
    Lang { code1: "", code2: "tiv", code2t: "", name: "Tiv" },
    Lang { code1: "", code2: "tkl", code2t: "", name: "Tokelau" },
    Lang { code1: "", code2: "tlh", code2t: "", name: "Klingon; tlhIngan-Hol" },
    Lang { code1: "", code2: "tli", code2t: "", name: "Tlingit" },
    Lang { code1: "", code2: "tmh", code2t: "", name: "Tamashek" },
    Lang { code1: "", code2: "tog", code2t: "", name: "Tonga (Nyasa)" },
    Lang { code1: "to", code2: "ton", code2t: "", name: "Tonga (Tonga Islands)" },
    Lang { code1: "", code2: "tpi", code2t: "", name: "Tok Pisin" },
    Lang { code1: "", code2: "tsi", code2t: "", name: "Tsimshian" },
    Lang { code1: "tn", code2: "tsn", code2t: "", name: "Tswana" },
    Lang { code1: "ts", code2: "tso", code2t: "", name: "Tsonga" },
    Lang { code1: "tk", code2: "tuk", code2t: "", name: "Turkmen" },
    Lang { code1: "", code2: "tum", code2t: "", name: "Tumbuka" },
    Lang { code1: "", code2: "tup", code2t: "", name: "Tupi languages" },
    Lang { code1: "tr", code2: "tur", code2t: "", name: "Turkish" },
    Lang { code1: "", code2: "tut", code2t: "", name: "Altaic languages" },
    Lang { code1: "", code2: "tvl", code2t: "", name: "Tuvalu" },
    Lang { code1: "tw", code2: "twi", code2t: "", name: "Twi" },
    Lang { code1: "", code2: "tyv", code2t: "", name: "Tuvinian" },
    Lang { code1: "", code2: "udm", code2t: "", name: "Udmurt" },
    Lang { code1: "", code2: "uga", code2t: "", name: "Ugaritic" },
    Lang { code1: "ug", code2: "uig", code2t: "", name: "Uighur; Uyghur" },
    Lang { code1: "uk", code2: "ukr", code2t: "", name: "Ukrainian" },
    Lang { code1: "", code2: "umb", code2t: "", name: "Umbundu" },
    Lang { code1: "", code2: "und", code2t: "", name: "Undetermined" },
    Lang { code1: "ur", code2: "urd", code2t: "", name: "Urdu" },
    Lang { code1: "uz", code2: "uzb", code2t: "", name: "Uzbek" },
    Lang { code1: "", code2: "vai", code2t: "", name: "Vai" },
    Lang { code1: "ve", code2: "ven", code2t: "", name: "Venda" },
    Lang { code1: "vi", code2: "vie", code2t: "", name: "Vietnamese" },
    Lang { code1: "vo", code2: "vol", code2t: "", name: "Volapük" },
    Lang { code1: "", code2: "vot", code2t: "", name: "Votic" },
    Lang { code1: "", code2: "wak", code2t: "", name: "Wakashan languages" },
    Lang { code1: "", code2: "wal", code2t: "", name: "Walamo" },
    Lang { code1: "", code2: "war", code2t: "", name: "Waray" },
    Lang { code1: "", code2: "was", code2t: "", name: "Washo" },
    Lang { code1: "cy", code2: "wel", code2t: "cym", name: "Welsh" },
    Lang { code1: "", code2: "wen", code2t: "", name: "Sorbian languages" },
    Lang { code1: "wa", code2: "wln", code2t: "", name: "Walloon" },
    Lang { code1: "wo", code2: "wol", code2t: "", name: "Wolof" },
    Lang { code1: "", code2: "xal", code2t: "", name: "Kalmyk; Oirat" },
    Lang { code1: "xh", code2: "xho", code2t: "", name: "Xhosa" },
    Lang { code1: "", code2: "yao", code2t: "", name: "Yao" },
    Lang { code1: "", code2: "yap", code2t: "", name: "Yapese" },
    Lang { code1: "yi", code2: "yid", code2t: "", name: "Yiddish" },
    Lang { code1: "yo", code2: "yor", code2t: "", name: "Yoruba" },
    Lang { code1: "", code2: "ypk", code2t: "", name: "Yupik languages" },
    Lang { code1: "", code2: "zap", code2t: "", name: "Zapotec" },
    Lang { code1: "", code2: "zbl", code2t: "", name: "Blissymbols; Blissymbolics; Bliss" },
    Lang { code1: "", code2: "zen", code2t: "", name: "Zenaga" },
    Lang { code1: "", code2: "zgh", code2t: "", name: "Standard Moroccan Tamazight" },
    Lang { code1: "za", code2: "zha", code2t: "", name: "Zhuang; Chuang" },
    Lang { code1: "", code2: "znd", code2t: "", name: "Zande languages" },
    Lang { code1: "zu", code2: "zul", code2t: "", name: "Zulu" },
    Lang { code1: "", code2: "zun", code2t: "", name: "Zuni" },
    Lang { code1: "", code2: "zxx", code2t: "", name: "No linguistic content; Not applicable" },
    Lang { code1: "", code2: "zza", code2t: "", name: "Zaza; Dimili; Dimli; Kirdki; Kirmanjki; Zazaki" },
];

fn by_code1(code: &str) -> Option<&'static Lang> {
    LANGUAGES
        .iter()
        .find(|l| !l.code1.is_empty() && l.code1.eq_ignore_ascii_case(code))
}

fn by_code2(code: &str) -> Option<&'static Lang> {
    LANGUAGES.iter().find(|l| {
        l.code2.eq_ignore_ascii_case(code)
            || (!l.code2t.is_empty() && l.code2t.eq_ignore_ascii_case(code))
    })
}

fn by_name(name: &str) -> Option<&'static Lang> {
    LANGUAGES.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

/// Normalize a tag or English name to the ISO-639-2 bibliographic form.
fn to_bibliographic(tag: &str) -> Option<&'static str> {
    by_code1(tag)
        .or_else(|| by_code2(tag))
        .or_else(|| by_name(tag))
        .map(|l| l.code2)
}

pub struct Iso6391;

impl Validator for Iso6391 {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "iso-639-1" | "language"
        )
    }

    fn validate(&self, datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        match by_code1(value) {
            Some(lang) => {
                r.info(format!("Equivalent iso-639-2 tag is {}", lang.code2));
                r.alternative(lang.code2);
                r.info(format!("Language code refers to {}", lang.name));
                r.alternative(lang.name);
            }
            None if datatype.eq_ignore_ascii_case("iso-639-1") => {
                r.error("Language code does not appear in the iso-639-1 list of valid codes");
            }
            None => {
                r.warn("Language code does not appear in the iso-639-1 list of valid codes");
            }
        }
        r
    }
}

pub struct Iso6392;

impl Validator for Iso6392 {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "iso-639-2" | "language"
        )
    }

    fn validate(&self, datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        if value.len() != 3 {
            r.error("ISO-639-2 language codes are all 3 letters");
            return r;
        }

        match by_code2(value) {
            Some(lang) => {
                if !lang.code1.is_empty() {
                    r.info(format!("Equivalent iso-639-1 tag is {}", lang.code1));
                    r.alternative(lang.code1);
                }
                r.info(format!("Language code refers to {}", lang.name));
                r.alternative(lang.name);
            }
            None if datatype.eq_ignore_ascii_case("iso-639-2") => {
                r.error("Language code does not appear in the iso-639-2 list of valid codes");
            }
            None => {
                r.warn("Language code does not appear in the iso-639-2 list of valid codes");
            }
        }
        r
    }
}

pub struct LanguageName;

impl Validator for LanguageName {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("language")
    }

    fn validate(&self, _datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        if let Some(lang) = by_name(value) {
            if !lang.code1.is_empty() {
                r.info(format!("ISO-639-1 language code for this language is {}", lang.code1));
                r.alternative(lang.code1);
            }
            r.info(format!("ISO-639-2 language code for this language is {}", lang.code2));
            r.alternative(lang.code2);
            return r;
        }

        let lower = value.to_ascii_lowercase();
        let possibles: Vec<&'static Lang> = LANGUAGES
            .iter()
            .filter(|l| !lower.is_empty() && l.name.to_ascii_lowercase().contains(&lower))
            .collect();

        if possibles.is_empty() {
            r.warn("Unable to locate language in the list of common language names");
            return r;
        }

        r.warn(
            "Could not get an exact match for this language in the list of common \
             language names, but a partial match was found",
        );
        for lang in possibles {
            r.alternative(lang.name);
            if !lang.code1.is_empty() {
                r.info(format!("ISO-639-1 language code for this language is {}", lang.code1));
                r.alternative(lang.code1);
            }
            r.info(format!("ISO-639-2 language code for this language is {}", lang.code2));
            r.alternative(lang.code2);
        }
        r
    }
}

/// Language tags are equivalent when they are equal after case folding, or
/// when both normalize to the same ISO-639-2 bibliographic code.
pub struct LanguageCompare;

impl Comparator for LanguageCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "language" | "iso-639-1" | "iso-639-2"
        )
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        let original = original.trim();
        let comparison = comparison.trim();

        if original.eq_ignore_ascii_case(comparison) {
            return ComparisonResult::matched();
        }

        match (to_bibliographic(original), to_bibliographic(comparison)) {
            (Some(a), Some(b)) if a == b => ComparisonResult::matched(),
            _ => ComparisonResult::unmatched(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> bool {
        LanguageCompare
            .compare("language", a, b, &Options::default())
            .success
    }

    #[test]
    fn normalizes_across_code_families() {
        assert_eq!(to_bibliographic("en"), Some("eng"));
        assert_eq!(to_bibliographic("eng"), Some("eng"));
        assert_eq!(to_bibliographic("English"), Some("eng"));
        // terminology form of German normalizes to the bibliographic form
        assert_eq!(to_bibliographic("deu"), Some("ger"));
        // codes with no two-letter equivalent normalize to themselves
        assert_eq!(to_bibliographic("grc"), Some("grc"));
        assert_eq!(to_bibliographic("xx"), None);
    }

    #[test]
    fn comparator_matches_code_and_name_forms() {
        assert!(compare("en", "eng"));
        assert!(compare("eng", "English"));
        assert!(compare("de", "deu"));
        assert!(!compare("en", "fre"));
    }

    #[test]
    fn unknown_but_equal_tags_match_by_case_folding() {
        assert!(compare("tlh", "TLH"));
        assert!(!compare("tlh", "qqq"));
    }

    #[test]
    fn iso6391_reports_alternatives() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoClient,
        };
        let r = Iso6391.validate("iso-639-1", "en", &ctx);
        assert!(!r.has_errors());
        assert_eq!(r.alternatives(), ["eng", "English"]);

        let r = Iso6391.validate("iso-639-1", "xx", &ctx);
        assert!(r.has_errors());

        // under the looser 'language' datatype an unknown code only warns
        let r = Iso6391.validate("language", "eng", &ctx);
        assert!(!r.has_errors());
        assert!(r.has_warnings());
    }

    #[test]
    fn iso6392_enforces_length() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoClient,
        };
        let r = Iso6392.validate("iso-639-2", "engl", &ctx);
        assert!(r.has_errors());

        let r = Iso6392.validate("iso-639-2", "eng", &ctx);
        assert!(!r.has_errors());
        assert_eq!(r.alternatives(), ["en", "English"]);
    }

    #[test]
    fn iso6392_accepts_codes_without_a_two_letter_form() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoClient,
        };
        for code in ["grc", "ace", "enm", "sga"] {
            let r = Iso6392.validate("iso-639-2", code, &ctx);
            assert!(!r.has_errors(), "{code} should validate");
            // no iso-639-1 equivalent to offer, just the name
            assert_eq!(r.alternatives().len(), 1, "{code}");
        }

        let r = Iso6392.validate("iso-639-2", "qqq", &ctx);
        assert!(r.has_errors());
    }

    #[test]
    fn language_name_partial_match_warns_with_suggestions() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoClient,
        };
        let r = LanguageName.validate("language", "Engl", &ctx);
        assert!(r.has_warnings());
        assert!(r.alternatives().contains(&"English".to_owned()));
    }

    struct NoClient;

    impl crate::http::AuthorityClient for NoClient {
        fn get(
            &self,
            _url: &str,
            _accept: Option<&str>,
        ) -> Result<crate::http::AuthorityResponse, crate::error::AuthorityError> {
            Err(crate::error::AuthorityError::Network("offline".into()))
        }
    }
}
