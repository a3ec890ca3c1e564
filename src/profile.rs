//! User profile and output-language types
//!
//! A profile is captured once when a session is created and stays immutable
//! for its lifetime; the resolver injects it into every fused system
//! instruction on the remote path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Education stage the student has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
}

impl EducationLevel {
    /// Parse the wire value used by the profile-capture form.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "10th" => Some(EducationLevel::Tenth),
            "12th" => Some(EducationLevel::Twelfth),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::Tenth => "10th",
            EducationLevel::Twelfth => "12th",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub education: EducationLevel,
}

/// Supported reply languages. The selector is a closed set; the code string
/// is what the fused instruction embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }

    /// Native-script label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
