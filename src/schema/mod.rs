// Response schema sent with every analysis request
// Author: kelexine (https://github.com/kelexine)

use serde_json::{json, Value};

/// Build the `responseSchema` that constrains the model's output.
///
/// Uses Gemini's OpenAPI-subset dialect (`OBJECT`, `ARRAY`, `STRING`) and
/// mirrors [`AnalysisResult`](crate::models::AnalysisResult) field for field.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "skinType": {
                "type": "STRING",
                "description": "e.g., oily, dry, combination, normal, sensitive"
            },
            "analysis": {
                "type": "STRING",
                "description": "A detailed 1-2 paragraph summary of the skin's condition."
            },
            "concerns": {
                "type": "ARRAY",
                "description": "A list of key skin concerns observed.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "Name of the concern, e.g., Acne, Pores, Wrinkles"
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief explanation of the concern for the user."
                        }
                    },
                    "required": ["name", "description"]
                }
            },
            "recommendations": {
                "type": "OBJECT",
                "properties": {
                    "morningRoutine": {
                        "type": "ARRAY",
                        "description": "Step-by-step morning skincare routine.",
                        "items": { "type": "STRING" }
                    },
                    "eveningRoutine": {
                        "type": "ARRAY",
                        "description": "Step-by-step evening skincare routine.",
                        "items": { "type": "STRING" }
                    },
                    "productSuggestions": {
                        "type": "ARRAY",
                        "description": "Specific K-Beauty product type suggestions.",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "type": {
                                    "type": "STRING",
                                    "description": "e.g., Gentle Cleanser, Hydrating Toner, Vitamin C Serum"
                                },
                                "reason": {
                                    "type": "STRING",
                                    "description": "Why this product type is recommended for the user's skin."
                                }
                            },
                            "required": ["type", "reason"]
                        }
                    }
                },
                "required": ["morningRoutine", "eveningRoutine", "productSuggestions"]
            }
        },
        "required": ["skinType", "analysis", "concerns", "recommendations"]
    })
}
