//! Vocabulary tables used by classification and extraction.
//!
//! Every entry is in folded form (lowercase, no diacritics). Plurals are
//! matched automatically, so only singular forms are listed.

/// Vehicle brands. A brand mention classifies a conversation as auto and
/// satisfies the `brand` field.
pub const VEHICLE_BRANDS: &[&str] = &[
    "audi",
    "bmw",
    "byd",
    "chery",
    "chevrolet",
    "chevy",
    "citroen",
    "dodge",
    "fiat",
    "ford",
    "honda",
    "hyundai",
    "jeep",
    "kia",
    "land rover",
    "lexus",
    "mazda",
    "mercedes",
    "mercedes-benz",
    "mitsubishi",
    "nissan",
    "peugeot",
    "porsche",
    "renault",
    "subaru",
    "suzuki",
    "tesla",
    "toyota",
    "volkswagen",
    "volvo",
    "vw",
];

/// Auto-domain trigger words, brands excluded.
pub const AUTO_KEYWORDS: &[&str] = &[
    "auto",
    "automovil",
    "automobile",
    "camioneta",
    "car",
    "carro",
    "coche",
    "moto",
    "motocicleta",
    "motorcycle",
    "suv",
    "truck",
    "vehicle",
    "vehiculo",
];

/// Travel-domain trigger words.
pub const TRAVEL_KEYWORDS: &[&str] = &[
    "flight",
    "journey",
    "travel",
    "traveling",
    "travelling",
    "trip",
    "turismo",
    "vacation",
    "vacaciones",
    "viaje",
    "viajar",
    "viajo",
    "viajamos",
    "vuelo",
];

/// Pet-domain trigger words. Species words and breeds are added on top.
pub const PET_KEYWORDS: &[&str] = &["animal", "cachorro", "mascota", "pet", "puppy"];

/// Health-domain trigger words.
pub const HEALTH_KEYWORDS: &[&str] = &[
    "clinica",
    "doctor",
    "enfermedad",
    "gastos medicos",
    "health",
    "hospital",
    "medical",
    "medico",
    "salud",
];

/// Words naming a dog.
pub const DOG_WORDS: &[&str] = &[
    "canino", "dog", "doggy", "perra", "perrita", "perrito", "perro",
];

/// Words naming a cat.
pub const CAT_WORDS: &[&str] = &[
    "cat", "felino", "gata", "gatita", "gatito", "gato", "kitten", "kitty",
];

/// Dog breeds.
pub const DOG_BREEDS: &[&str] = &[
    "beagle",
    "border collie",
    "boxer",
    "bulldog",
    "caniche",
    "chihuahua",
    "cocker",
    "dachshund",
    "doberman",
    "german shepherd",
    "golden retriever",
    "husky",
    "labrador",
    "maltes",
    "pastor aleman",
    "pitbull",
    "poodle",
    "pug",
    "rottweiler",
    "salchicha",
    "schnauzer",
    "shih tzu",
    "yorkshire",
];

/// Cat breeds.
pub const CAT_BREEDS: &[&str] = &[
    "angora",
    "bengala",
    "bengal",
    "british shorthair",
    "maine coon",
    "persa",
    "persian",
    "ragdoll",
    "siames",
    "siamese",
    "sphynx",
];

/// Breed answers that name no pedigree but are still specific.
pub const MIXED_BREEDS: &[&str] = &["criollo", "mestizo", "mixed breed", "sin raza"];

/// Countries, regions, and major cities recognized as place names.
pub const PLACES: &[&str] = &[
    // Countries and regions
    "alemania",
    "argentina",
    "asia",
    "bolivia",
    "brasil",
    "brazil",
    "canada",
    "chile",
    "china",
    "colombia",
    "costa rica",
    "cuba",
    "ecuador",
    "eeuu",
    "el salvador",
    "espana",
    "estados unidos",
    "europa",
    "europe",
    "france",
    "francia",
    "germany",
    "guatemala",
    "honduras",
    "inglaterra",
    "italia",
    "italy",
    "japan",
    "japon",
    "mexico",
    "nicaragua",
    "panama",
    "paraguay",
    "peru",
    "portugal",
    "puerto rico",
    "reino unido",
    "republica dominicana",
    "spain",
    "united states",
    "uruguay",
    "venezuela",
    // Cities
    "barcelona",
    "bogota",
    "buenos aires",
    "cali",
    "cancun",
    "caracas",
    "cartagena",
    "ciudad de mexico",
    "cdmx",
    "guadalajara",
    "la paz",
    "las vegas",
    "lima",
    "lisboa",
    "london",
    "londres",
    "los angeles",
    "madrid",
    "medellin",
    "miami",
    "monterrey",
    "montevideo",
    "new york",
    "nueva york",
    "orlando",
    "paris",
    "punta cana",
    "quito",
    "roma",
    "rome",
    "santiago",
    "sao paulo",
    "tokio",
    "tokyo",
];

/// Returns true if the folded phrase is a recognized place name.
pub fn is_known_place(folded: &str) -> bool {
    PLACES.contains(&folded)
}

/// Capitalized words that follow an anchor without naming a place.
pub const NON_PLACE_WORDS: &[&str] = &[
    "el", "la", "los", "las", "mi", "mis", "su", "sus", "tu", "tus", "un", "una", "yo", "usted",
    "ustedes", "nuestro", "nuestra", "que", "the", "my", "your", "our", "a", "an", "i",
];

/// Words connecting capitalized parts of a place name ("Ciudad de Panamá").
pub const PLACE_CONNECTORS: &[&str] = &["de", "del"];

/// Trip purposes: canonical value and trigger words.
pub const TRIP_PURPOSES: &[(&str, &[&str])] = &[
    (
        "business",
        &["business", "conferencia", "conference", "negocio", "trabajo", "work"],
    ),
    (
        "study",
        &["estudiar", "estudio", "intercambio", "study", "studies", "universidad", "university"],
    ),
    (
        "leisure",
        &["holiday", "leisure", "paseo", "placer", "turismo", "vacaciones", "vacation"],
    ),
];

/// Gender words: canonical value and trigger words.
pub const GENDERS: &[(&str, &[&str])] = &[
    ("female", &["female", "femenina", "femenino", "mujer", "woman"]),
    ("male", &["hombre", "male", "man", "masculino", "varon"]),
];
