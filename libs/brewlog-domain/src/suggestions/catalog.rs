//! Varietal and process advice
//!
//! Keywords are matched against lowercased coffee details. Origin and
//! sub-type refinements layer on top of the base advice of their family.

use super::rules::{Predicate, Rule, RuleTable};
use super::SuggestionPatch;

const PAPER_WHITE: &str = "Paper filter (preferably white, oxygen-bleached)";

// Varietals

const ETHIOPIAN_HEIRLOOM: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16.5"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("90-93°C (194-199°F)"),
    water_quality: Some("120-150 ppm TDS, lower mineral content to highlight floral notes"),
    technique: Some("45-60s bloom, gentle pulse pouring technique"),
    optimal_age: Some("10-21 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Bergamot, jasmine, peach, blueberry, tea-like"),
    troubleshooting: Some("To emphasize florals, use cooler water. For more fruit sweetness, extend brew time slightly."),
    description: Some("Ethiopian heirloom varieties often have complex floral, fruity, and tea-like characteristics. A gentler approach with cooler water helps highlight these delicate flavors."),
    ..SuggestionPatch::EMPTY
};

const YIRGACHEFFE: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16.5"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("89-92°C (192-198°F)"),
    water_quality: Some("120-140 ppm TDS, softer water preferred"),
    technique: Some("60s bloom, very gentle pulse pouring"),
    optimal_age: Some("10-21 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Citrus, bergamot, floral, lemon, honey"),
    troubleshooting: Some("If florals are muted, reduce water temperature by 1-2°C"),
    description: Some("Yirgacheffe coffees are prized for their distinctive floral and citrus notes. A very gentle extraction approach preserves these delicate aromatics."),
    ..SuggestionPatch::EMPTY
};

const SIDAMO: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium (20-24 on Comandante)"),
    water_temp: Some("90-93°C (194-199°F)"),
    water_quality: Some("130-150 ppm TDS, balanced mineral content"),
    technique: Some("45s bloom, gentle continuous pour"),
    optimal_age: Some("7-21 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Blueberry, chocolate, citrus, wine-like"),
    troubleshooting: Some("If acidity is too pronounced, slightly lower water temperature"),
    description: Some("Sidamo coffees typically have pronounced berry notes with wine-like acidity. A balanced approach highlights its complex characteristics."),
    ..SuggestionPatch::EMPTY
};

const GUJI: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16.5"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("90-92°C (194-198°F)"),
    water_quality: Some("120-140 ppm TDS, softer water preferred"),
    technique: Some("60s bloom, very gentle pulse pouring"),
    optimal_age: Some("10-21 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Stone fruit, floral, tea-like, complex berry"),
    troubleshooting: Some("For more sweetness, try a 1:16 ratio and extend brew time slightly"),
    description: Some("Guji coffees are renowned for their complex stone fruit notes and floral aromatics. A gentle extraction approach highlights these nuanced characteristics."),
    ..SuggestionPatch::EMPTY
};

const GESHA: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:17"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("90-92°C (194-198°F)"),
    water_quality: Some("100-130 ppm TDS, lower mineral content to highlight florals"),
    technique: Some("Gentle pour with extended bloom time (45-60s), then slow pulse pours"),
    optimal_age: Some("10-21 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Jasmine, bergamot, peach, tropical fruit, tea-like"),
    pour_technique: Some("Extremely gentle, 6-7g of water per second maximum flow rate"),
    troubleshooting: Some("If tea-like notes are muted, reduce temperature by 2°C. If lacking sweetness, try 1:16.5 ratio."),
    description: Some("Gesha/Geisha varietals are known for their delicate floral and tea-like qualities. A gentler extraction with slightly cooler water helps highlight these nuanced flavors. Worth treating with exceptional care."),
    ..SuggestionPatch::EMPTY
};

const GESHA_PANAMA: SuggestionPatch = SuggestionPatch {
    water_temp: Some("89-91°C (192-196°F)"),
    water_quality: Some("100-120 ppm TDS, very soft water preferred"),
    flavor_notes: Some("Jasmine, bergamot, tropical fruits, honey, exceptional clarity"),
    description: Some("Panamanian Gesha is the benchmark for this varietal, with unmatched clarity and floral complexity. Extremely gentle extraction with cooler water preserves its delicate characteristics."),
    ..SuggestionPatch::EMPTY
};

const GESHA_COLOMBIA: SuggestionPatch = SuggestionPatch {
    water_temp: Some("90-93°C (194-199°F)"),
    flavor_notes: Some("Jasmine, stone fruit, citrus, maple syrup"),
    description: Some("Colombian Gesha typically shows more body and sweetness than Panamanian counterparts, with stone fruit complimenting the floral notes."),
    ..SuggestionPatch::EMPTY
};

const BOURBON: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:15.5"),
    water_temp: Some("94-96°C (201-205°F)"),
    water_quality: Some("150-180 ppm TDS, higher mineral content enhances sweetness"),
    technique: Some("Medium-strong bloom (60s), then two main pours"),
    optimal_age: Some("7-21 days off roast"),
    filter_type: Some("Paper filter or metal filter for higher body"),
    flavor_notes: Some("Caramel, red fruit, balanced acidity, nutty"),
    troubleshooting: Some("To enhance sweetness, try a stronger 1:15 ratio"),
    description: Some("Bourbon tends to have good sweetness and balanced acidity. A slightly higher temperature and stronger ratio can help accentuate its inherent sweetness."),
    ..SuggestionPatch::EMPTY
};

const YELLOW_BOURBON: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:15.5"),
    grind_size: Some("Medium (20-24 on Comandante)"),
    water_temp: Some("92-94°C (198-201°F)"),
    flavor_notes: Some("Honey, caramel, yellow fruits, softer acidity"),
    description: Some("Yellow Bourbon combines the sweetness of Bourbon with a softer acidity. Slightly stronger ratio helps develop its full sweetness potential."),
    ..SuggestionPatch::EMPTY
};

const PINK_BOURBON: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("91-93°C (196-199°F)"),
    technique: Some("60s bloom, gentle pulse pouring"),
    flavor_notes: Some("Floral, red berries, tropical fruit, wine-like acidity"),
    description: Some("Pink Bourbon often presents with floral notes and vibrant acidity. A medium-fine grind with moderate temperature helps highlight its complex flavor profile."),
    ..SuggestionPatch::EMPTY
};

const ORANGE_BOURBON: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium (20-24 on Comandante)"),
    water_temp: Some("93-95°C (199-203°F)"),
    flavor_notes: Some("Orange zest, caramel, chocolate, bright acidity"),
    description: Some("Orange Bourbon typically has a good balance of sweetness and acidity with distinctive citrus notes. A standard approach with slightly higher temperature helps develop its full flavor profile."),
    ..SuggestionPatch::EMPTY
};

const SL28: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("93-95°C (199-203°F)"),
    water_quality: Some("150-170 ppm TDS, balanced mineral content"),
    technique: Some("45s bloom, then slow continuous pour"),
    optimal_age: Some("10-28 days off roast (Kenyan coffees benefit from longer rest)"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Blackcurrant, tomato, grapefruit, winey, complex acidity"),
    troubleshooting: Some("For more balanced acidity, try a 1:16.5 ratio"),
    description: Some("SL28 is known for its vibrant blackcurrant notes and complex acidity. A medium-fine grind and slightly higher temperature helps extract its distinctive berry and citrus notes."),
    ..SuggestionPatch::EMPTY
};

const SL34: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium (20-25 on Comandante)"),
    water_temp: Some("92-94°C (198-201°F)"),
    water_quality: Some("150-180 ppm TDS"),
    technique: Some("40s bloom, then two medium pours"),
    optimal_age: Some("10-28 days off roast"),
    filter_type: Some("Paper filter"),
    flavor_notes: Some("Blackberry, chocolate, fuller body than SL28, citrus"),
    description: Some("SL34 typically has good body with chocolate notes complementing the berry acidity. A standard approach works well to balance its body and sweetness."),
    ..SuggestionPatch::EMPTY
};

const KENYAN: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("93-95°C (199-203°F)"),
    water_quality: Some("150-170 ppm TDS"),
    technique: Some("45s bloom, then slow continuous pour"),
    optimal_age: Some("10-28 days off roast"),
    filter_type: Some("Paper filter"),
    flavor_notes: Some("Blackcurrant, grapefruit, tomato, complex acidity"),
    description: Some("Kenyan coffees typically have distinctive blackcurrant notes with vibrant, juicy acidity. A medium-fine grind with slightly higher temperature helps extract these characteristics."),
    ..SuggestionPatch::EMPTY
};

const PACAMARA: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:15"),
    grind_size: Some("Medium-coarse (24-28 on Comandante)"),
    water_temp: Some("94-96°C (201-205°F)"),
    water_quality: Some("150-180 ppm TDS"),
    technique: Some("Extended bloom (60s), then pulse pouring technique"),
    optimal_age: Some("7-21 days off roast"),
    filter_type: Some("Paper filter or metal filter for higher body"),
    flavor_notes: Some("Stone fruit, maple syrup, complex acidity, full body"),
    troubleshooting: Some("Due to bean size, may require coarser grind than expected. If astringent, go coarser."),
    description: Some("Pacamara can have complex acidity and flavor with large bean size. A coarser grind with hotter water helps balance the extraction of this distinctive varietal."),
    ..SuggestionPatch::EMPTY
};

const TYPICA: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    water_temp: Some("92-94°C (198-201°F)"),
    water_quality: Some("150 ppm TDS"),
    technique: Some("Gentle continuous pour after 45s bloom"),
    optimal_age: Some("7-14 days off roast"),
    filter_type: Some("Paper filter"),
    flavor_notes: Some("Clean, sweet, mild acidity, chocolate, nutty"),
    description: Some("Typica often has clean, sweet characteristics. A balanced approach helps showcase its traditional flavors."),
    ..SuggestionPatch::EMPTY
};

const CATURRA: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16.5"),
    grind_size: Some("Medium (20-25 on Comandante)"),
    water_quality: Some("140-160 ppm TDS"),
    technique: Some("Standard pour-over with 30s bloom, then continuous pour"),
    optimal_age: Some("7-14 days off roast"),
    filter_type: Some("Paper filter"),
    flavor_notes: Some("Bright acidity, medium body, citrus, apple"),
    description: Some("Caturra often has bright acidity and medium body. A standard approach works well, but a slightly more dilute ratio can help highlight its clarity."),
    ..SuggestionPatch::EMPTY
};

const ETHIOPIAN: &[&str] = &["ethiopian", "ethiopia"];
const GESHA_NAMES: &[&str] = &["gesha", "geisha"];

const VARIETAL_RULES: &[Rule] = &[
    Rule {
        name: "ethiopian heirloom",
        predicate: Predicate {
            requires: &[ETHIOPIAN, &["heirloom", "landrace"]],
            none_of: &[],
        },
        patches: &[ETHIOPIAN_HEIRLOOM],
    },
    Rule {
        name: "yirgacheffe",
        predicate: Predicate {
            requires: &[ETHIOPIAN, &["yirgacheffe"]],
            none_of: &[],
        },
        patches: &[YIRGACHEFFE],
    },
    Rule {
        name: "sidamo",
        predicate: Predicate {
            requires: &[ETHIOPIAN, &["sidamo"]],
            none_of: &[],
        },
        patches: &[SIDAMO],
    },
    Rule {
        name: "guji",
        predicate: Predicate {
            requires: &[ETHIOPIAN, &["guji"]],
            none_of: &[],
        },
        patches: &[GUJI],
    },
    // Other Ethiopian coffees keep the baseline and stop the scan
    Rule {
        name: "ethiopian",
        predicate: Predicate {
            requires: &[ETHIOPIAN],
            none_of: &[],
        },
        patches: &[],
    },
    Rule {
        name: "panama gesha",
        predicate: Predicate {
            requires: &[GESHA_NAMES, &["panama"]],
            none_of: &[],
        },
        patches: &[GESHA, GESHA_PANAMA],
    },
    Rule {
        name: "colombia gesha",
        predicate: Predicate {
            requires: &[GESHA_NAMES, &["colombia"]],
            none_of: &[],
        },
        patches: &[GESHA, GESHA_COLOMBIA],
    },
    Rule {
        name: "gesha",
        predicate: Predicate {
            requires: &[GESHA_NAMES],
            none_of: &[],
        },
        patches: &[GESHA],
    },
    Rule {
        name: "yellow bourbon",
        predicate: Predicate {
            requires: &[&["yellow bourbon"]],
            none_of: &[],
        },
        patches: &[BOURBON, YELLOW_BOURBON],
    },
    Rule {
        name: "pink bourbon",
        predicate: Predicate {
            requires: &[&["pink bourbon"]],
            none_of: &[],
        },
        patches: &[BOURBON, PINK_BOURBON],
    },
    Rule {
        name: "orange bourbon",
        predicate: Predicate {
            requires: &[&["orange bourbon"]],
            none_of: &[],
        },
        patches: &[BOURBON, ORANGE_BOURBON],
    },
    Rule {
        name: "bourbon",
        predicate: Predicate {
            requires: &[&["bourbon"]],
            none_of: &[],
        },
        patches: &[BOURBON],
    },
    Rule {
        name: "sl28",
        predicate: Predicate {
            requires: &[&["sl28", "sl-28"]],
            none_of: &[],
        },
        patches: &[SL28],
    },
    Rule {
        name: "sl34",
        predicate: Predicate {
            requires: &[&["sl34", "sl-34"]],
            none_of: &[],
        },
        patches: &[SL34],
    },
    Rule {
        name: "kenyan",
        predicate: Predicate {
            requires: &[&["kenyan"]],
            none_of: &[],
        },
        patches: &[KENYAN],
    },
    Rule {
        name: "pacamara",
        predicate: Predicate {
            requires: &[&["pacamara"]],
            none_of: &[],
        },
        patches: &[PACAMARA],
    },
    Rule {
        name: "typica",
        predicate: Predicate {
            requires: &[&["typica"]],
            none_of: &[],
        },
        patches: &[TYPICA],
    },
    Rule {
        name: "caturra",
        predicate: Predicate {
            requires: &[&["caturra"]],
            none_of: &["maracaturra"],
        },
        patches: &[CATURRA],
    },
];

// Processes

const NATURAL: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16.5 to 1:17"),
    grind_size: Some("Medium-coarse (24-28 on Comandante)"),
    water_temp: Some("88-92°C (190-198°F)"),
    water_quality: Some("120-150 ppm TDS, softer water preferred"),
    technique: Some("Longer bloom (45-60s), gentle pulse pouring"),
    optimal_age: Some("14-28 days off roast (naturals benefit from longer rest)"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Berries, tropical fruit, fermented notes, wine-like"),
    troubleshooting: Some("If ferment flavors are too intense, use cooler water and more dilute ratio (1:17-1:18)"),
    description: Some("Natural processed coffees have pronounced fruit notes and sweetness. A slightly coarser grind and cooler water can help control ferment notes while highlighting the fruity character."),
    ..SuggestionPatch::EMPTY
};

const WASHED: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:15.5 to 1:16"),
    grind_size: Some("Medium (20-25 on Comandante)"),
    water_temp: Some("92-96°C (198-205°F)"),
    water_quality: Some("150-180 ppm TDS"),
    technique: Some("Standard 30-45s bloom, then continuous pour"),
    optimal_age: Some("7-21 days off roast"),
    filter_type: Some("Paper filter or metal filter depending on desired clarity"),
    flavor_notes: Some("Clean, bright acidity, transparent, defined sweetness"),
    description: Some("Washed coffees typically have a cleaner profile with defined acidity. A standard approach with slightly higher temperature can highlight these characteristics."),
    ..SuggestionPatch::EMPTY
};

const DOUBLE_WASHED: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium-fine (18-22 on Comandante)"),
    water_temp: Some("92-94°C (198-201°F)"),
    water_quality: Some("130-150 ppm TDS"),
    technique: Some("30s bloom, then continuous measured pour"),
    flavor_notes: Some("Exceptional clarity, vibrant acidity, clean finish"),
    description: Some("Double washed coffees have exceptional clarity and defined acidity. A medium-fine grind helps highlight their clean profile and vibrant characteristics."),
    ..SuggestionPatch::EMPTY
};

const HONEY: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    grind_size: Some("Medium (20-24 on Comandante)"),
    water_temp: Some("90-94°C (194-201°F)"),
    water_quality: Some("140-160 ppm TDS"),
    technique: Some("45s bloom, then two main gentle pours"),
    optimal_age: Some("10-21 days off roast"),
    filter_type: Some("Paper filter"),
    flavor_notes: Some("Balanced sweetness and acidity, stone fruit, honey"),
    description: Some("Honey/pulped natural coffees balance the fruity sweetness of naturals with some clarity of washed coffees. A moderate approach helps balance these characteristics."),
    ..SuggestionPatch::EMPTY
};

const BLACK_HONEY: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    water_temp: Some("90-92°C (194-198°F)"),
    water_quality: Some("130-150 ppm TDS"),
    flavor_notes: Some("Intense sweetness, dried fruit, full body, wine-like"),
    description: Some("Black honey processing leaves most of the mucilage intact, creating fruity sweetness similar to naturals. A moderate approach with slightly cooler water balances sweetness and clarity."),
    ..SuggestionPatch::EMPTY
};

const RED_HONEY: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    water_temp: Some("91-93°C (196-199°F)"),
    water_quality: Some("140-160 ppm TDS"),
    flavor_notes: Some("Stone fruit, caramel, moderate body, good sweetness"),
    description: Some("Red honey processing leaves significant mucilage, creating good sweetness with moderate clarity. A balanced approach works well for this processing method."),
    ..SuggestionPatch::EMPTY
};

const YELLOW_HONEY: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    water_temp: Some("92-94°C (198-201°F)"),
    water_quality: Some("140-160 ppm TDS"),
    flavor_notes: Some("Balanced acidity, mild fruit notes, honey sweetness"),
    description: Some("Yellow honey processing removes more mucilage, resulting in a cleaner cup with subtle sweetness. A standard approach helps balance its characteristics."),
    ..SuggestionPatch::EMPTY
};

const WHITE_HONEY: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:16"),
    water_temp: Some("92-95°C (198-203°F)"),
    water_quality: Some("150-170 ppm TDS"),
    flavor_notes: Some("Clean, bright acidity, subtle sweetness, tea-like"),
    description: Some("White honey processing removes most of the mucilage, creating a profile closer to washed coffees. A standard approach with slightly higher temperature highlights its clean characteristics."),
    ..SuggestionPatch::EMPTY
};

const ANAEROBIC: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:17"),
    grind_size: Some("Medium-coarse (24-28 on Comandante)"),
    water_temp: Some("88-92°C (190-198°F)"),
    water_quality: Some("120-140 ppm TDS, softer water preferred"),
    technique: Some("Extended bloom (60s), very gentle pulse pours"),
    optimal_age: Some("14-28 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Intense fruit, fermentation notes, wine-like acidity"),
    troubleshooting: Some("If ferment flavors are overwhelming, use cooler water and more dilute ratio"),
    description: Some("Anaerobic fermentation creates unique and often intense flavor profiles. A gentler extraction with cooler water helps control the ferment notes while highlighting the unique characteristics."),
    ..SuggestionPatch::EMPTY
};

const CARBONIC_MACERATION: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:17"),
    grind_size: Some("Medium-coarse (24-28 on Comandante)"),
    water_temp: Some("88-91°C (190-196°F)"),
    water_quality: Some("120-140 ppm TDS, softer water preferred"),
    technique: Some("60s bloom, very gentle pulse pours with long intervals"),
    optimal_age: Some("14-28 days off roast"),
    filter_type: Some(PAPER_WHITE),
    flavor_notes: Some("Wine-like, red fruit, complex acidity, unique fermentation"),
    troubleshooting: Some("If wine-like notes are too intense, increase dilution to 1:17.5"),
    description: Some("Carbonic maceration creates intense fruit-forward profiles with wine-like characteristics. A gentler approach with cooler water helps balance the intense flavors while maintaining clarity."),
    ..SuggestionPatch::EMPTY
};

const WET_HULLED: SuggestionPatch = SuggestionPatch {
    brew_ratio: Some("1:15"),
    grind_size: Some("Medium-coarse (24-28 on Comandante)"),
    water_temp: Some("94-96°C (201-205°F)"),
    water_quality: Some("180-220 ppm TDS, higher mineral content"),
    technique: Some("30s bloom, then strong continuous pour"),
    optimal_age: Some("14-28 days off roast"),
    filter_type: Some("Paper or metal filter"),
    flavor_notes: Some("Earthy, herbal, cedar, spice, heavy body, low acidity"),
    troubleshooting: Some("If earthy notes are too intense, try slightly cooler water and finer grind"),
    description: Some("Wet hulled coffee (common in Indonesia) has distinctive earthy and spicy characteristics with full body. A stronger ratio and higher temperature helps balance these bold flavors."),
    ..SuggestionPatch::EMPTY
};

const WASHED_NAMES: &[&str] = &["washed", "wet"];
const HONEY_NAMES: &[&str] = &["honey", "pulped"];

const PROCESS_RULES: &[Rule] = &[
    Rule {
        name: "natural",
        predicate: Predicate {
            requires: &[&["natural", "dry"]],
            none_of: &[],
        },
        patches: &[NATURAL],
    },
    // Deliberately not a bare substring test on "wet": that would file wet
    // hulled under washed. The washed rules skip "hulled" so it reaches its
    // own rule below.
    Rule {
        name: "double washed",
        predicate: Predicate {
            requires: &[WASHED_NAMES, &["double washed", "double soaked"]],
            none_of: &["hulled"],
        },
        patches: &[WASHED, DOUBLE_WASHED],
    },
    Rule {
        name: "washed",
        predicate: Predicate {
            requires: &[WASHED_NAMES],
            none_of: &["hulled"],
        },
        patches: &[WASHED],
    },
    Rule {
        name: "black honey",
        predicate: Predicate {
            requires: &[&["black honey"]],
            none_of: &[],
        },
        patches: &[HONEY, BLACK_HONEY],
    },
    Rule {
        name: "red honey",
        predicate: Predicate {
            requires: &[&["red honey"]],
            none_of: &[],
        },
        patches: &[HONEY, RED_HONEY],
    },
    Rule {
        name: "yellow honey",
        predicate: Predicate {
            requires: &[&["yellow honey"]],
            none_of: &[],
        },
        patches: &[HONEY, YELLOW_HONEY],
    },
    Rule {
        name: "white honey",
        predicate: Predicate {
            requires: &[&["white honey"]],
            none_of: &[],
        },
        patches: &[HONEY, WHITE_HONEY],
    },
    Rule {
        name: "honey",
        predicate: Predicate {
            requires: &[HONEY_NAMES],
            none_of: &[],
        },
        patches: &[HONEY],
    },
    Rule {
        name: "anaerobic",
        predicate: Predicate {
            requires: &[&["anaerobic", "fermentation"]],
            none_of: &[],
        },
        patches: &[ANAEROBIC],
    },
    Rule {
        name: "carbonic maceration",
        predicate: Predicate {
            requires: &[&["carbonic maceration"]],
            none_of: &[],
        },
        patches: &[CARBONIC_MACERATION],
    },
    Rule {
        name: "wet hulled",
        predicate: Predicate {
            requires: &[&["wet hulled", "giling basah"]],
            none_of: &[],
        },
        patches: &[WET_HULLED],
    },
];

/// Varietal rules, most specific first
pub const VARIETALS: RuleTable = RuleTable::new(VARIETAL_RULES);

/// Process rules, most specific first
pub const PROCESSES: RuleTable = RuleTable::new(PROCESS_RULES);
