// Skin analysis result types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// A complete skin analysis as returned by the model.
///
/// Every field is required on the wire; a response missing any of them
/// fails to decode instead of producing a partially filled result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// e.g. oily, dry, combination, normal, sensitive
    pub skin_type: String,

    /// Free-text summary of the skin's condition.
    pub analysis: String,

    pub concerns: Vec<Concern>,

    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
    pub name: String,
    pub description: String,
}

/// Routines are ordered: index 0 is the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub morning_routine: Vec<String>,
    pub evening_routine: Vec<String>,
    pub product_suggestions: Vec<ProductSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSuggestion {
    #[serde(rename = "type")]
    pub product_type: String,
    pub reason: String,
}

impl AnalysisResult {
    /// Check the semantic constraints that structural decoding can't express.
    ///
    /// Rejects blank skin type or analysis text, and concerns or product
    /// suggestions without a name/type. Empty lists are accepted.
    pub fn validate(&self) -> Result<(), String> {
        if self.skin_type.trim().is_empty() {
            return Err("skinType is empty".to_string());
        }
        if self.analysis.trim().is_empty() {
            return Err("analysis is empty".to_string());
        }
        if let Some(i) = self.concerns.iter().position(|c| c.name.trim().is_empty()) {
            return Err(format!("concerns[{}].name is empty", i));
        }
        if let Some(i) = self
            .recommendations
            .product_suggestions
            .iter()
            .position(|p| p.product_type.trim().is_empty())
        {
            return Err(format!("recommendations.productSuggestions[{}].type is empty", i));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            skin_type: "combination".to_string(),
            analysis: "T-zone is oily.".to_string(),
            concerns: vec![Concern {
                name: "Pores".to_string(),
                description: "Enlarged pores on the nose.".to_string(),
            }],
            recommendations: Recommendations {
                morning_routine: vec!["Cleanse".to_string(), "Sunscreen".to_string()],
                evening_routine: vec!["Oil cleanse".to_string()],
                product_suggestions: vec![ProductSuggestion {
                    product_type: "BHA Toner".to_string(),
                    reason: "Clears pores.".to_string(),
                }],
            },
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["skinType"], "combination");
        assert_eq!(value["recommendations"]["morningRoutine"][1], "Sunscreen");
        assert_eq!(value["recommendations"]["productSuggestions"][0]["type"], "BHA Toner");
    }

    #[test]
    fn test_missing_field_fails() {
        let value = json!({
            "skinType": "dry",
            "analysis": "Flaky.",
            "concerns": [],
        });
        assert!(serde_json::from_value::<AnalysisResult>(value).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut blank = sample();
        blank.skin_type = "  ".to_string();
        assert!(blank.validate().is_err());

        let mut unnamed = sample();
        unnamed.recommendations.product_suggestions[0].product_type.clear();
        assert_eq!(
            unnamed.validate().unwrap_err(),
            "recommendations.productSuggestions[0].type is empty"
        );
    }
}
