//! Brewing suggestion records

use std::fmt;

use serde::Serialize;

/// Brewing advice for a coffee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewingSuggestion {
    pub brew_ratio: String,
    pub grind_size: String,
    pub water_temp: String,
    pub brew_time: String,
    pub technique: String,
    pub water_quality: String,
    pub optimal_age: String,
    pub flavor_notes: String,
    pub troubleshooting: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pour_technique: Option<String>,
}

impl Default for BrewingSuggestion {
    /// Baseline advice suitable for most coffees
    fn default() -> Self {
        Self {
            brew_ratio: "1:16".to_string(),
            grind_size: "Medium (20-25 on Comandante)".to_string(),
            water_temp: "92-94°C (198-201°F)".to_string(),
            brew_time: "2:30 - 3:00".to_string(),
            technique: "Standard pour-over with 45s bloom, then continuous pour".to_string(),
            water_quality: "150 ppm TDS, 50-75 ppm calcium hardness, pH 7.0".to_string(),
            optimal_age: "7-14 days off roast".to_string(),
            flavor_notes: "Balanced extraction".to_string(),
            troubleshooting: "If sour, grind finer or increase temperature. If bitter, grind coarser or decrease temperature.".to_string(),
            description: "Standard balanced brewing approach suitable for most coffees.".to_string(),
            filter_type: None,
            pour_technique: None,
        }
    }
}

impl fmt::Display for BrewingSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "Brew Ratio:         {}", self.brew_ratio)?;
        writeln!(f, "Grind Size:         {}", self.grind_size)?;
        writeln!(f, "Water Temperature:  {}", self.water_temp)?;
        writeln!(f, "Water Quality:      {}", self.water_quality)?;
        writeln!(f, "Target Brew Time:   {}", self.brew_time)?;
        writeln!(f, "Technique:          {}", self.technique)?;
        if let Some(pour) = &self.pour_technique {
            writeln!(f, "Pour Technique:     {}", pour)?;
        }
        if let Some(filter) = &self.filter_type {
            writeln!(f, "Filter:             {}", filter)?;
        }
        writeln!(f, "Optimal Age:        {}", self.optimal_age)?;
        writeln!(f, "Flavor Notes:       {}", self.flavor_notes)?;
        write!(f, "Troubleshooting:    {}", self.troubleshooting)
    }
}

/// A partial suggestion, overlaid field by field onto a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPatch {
    pub brew_ratio: Option<&'static str>,
    pub grind_size: Option<&'static str>,
    pub water_temp: Option<&'static str>,
    pub brew_time: Option<&'static str>,
    pub technique: Option<&'static str>,
    pub water_quality: Option<&'static str>,
    pub optimal_age: Option<&'static str>,
    pub flavor_notes: Option<&'static str>,
    pub troubleshooting: Option<&'static str>,
    pub description: Option<&'static str>,
    pub filter_type: Option<&'static str>,
    pub pour_technique: Option<&'static str>,
}

impl SuggestionPatch {
    /// A patch that changes nothing
    pub const EMPTY: SuggestionPatch = SuggestionPatch {
        brew_ratio: None,
        grind_size: None,
        water_temp: None,
        brew_time: None,
        technique: None,
        water_quality: None,
        optimal_age: None,
        flavor_notes: None,
        troubleshooting: None,
        description: None,
        filter_type: None,
        pour_technique: None,
    };

    /// Overwrite every field of `suggestion` that this patch sets
    pub fn apply(&self, suggestion: &mut BrewingSuggestion) {
        fn set(target: &mut String, value: Option<&str>) {
            if let Some(value) = value {
                *target = value.to_string();
            }
        }

        set(&mut suggestion.brew_ratio, self.brew_ratio);
        set(&mut suggestion.grind_size, self.grind_size);
        set(&mut suggestion.water_temp, self.water_temp);
        set(&mut suggestion.brew_time, self.brew_time);
        set(&mut suggestion.technique, self.technique);
        set(&mut suggestion.water_quality, self.water_quality);
        set(&mut suggestion.optimal_age, self.optimal_age);
        set(&mut suggestion.flavor_notes, self.flavor_notes);
        set(&mut suggestion.troubleshooting, self.troubleshooting);
        set(&mut suggestion.description, self.description);

        if let Some(filter) = self.filter_type {
            suggestion.filter_type = Some(filter.to_string());
        }
        if let Some(pour) = self.pour_technique {
            suggestion.pour_technique = Some(pour.to_string());
        }
    }
}

impl Default for SuggestionPatch {
    fn default() -> Self {
        Self::EMPTY
    }
}
