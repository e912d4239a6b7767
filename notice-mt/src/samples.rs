//! Reference translations of typical public notices

use serde::Serialize;

/// An English notice paired with its expected Hindi translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplePair {
    pub english: &'static str,
    pub hindi: &'static str,
}

pub const SAMPLE_PAIRS: &[SamplePair] = &[
    SamplePair {
        english: "Parking is not allowed.",
        hindi: "पार्किंग की अनुमति नहीं है।",
    },
    SamplePair {
        english: "Unauthorized entry is prohibited.",
        hindi: "अनधिकृत प्रवेश प्रतिबंधित है।",
    },
    SamplePair {
        english: "This notice is issued under Section 144 of the Criminal Procedure Code",
        hindi: "यह नोटिस दंड प्रक्रिया संहिता की धारा 144 के अंतर्गत जारी किया गया है",
    },
    SamplePair {
        english: "Smoking is strictly forbidden in public places.",
        hindi: "सार्वजनिक स्थानों पर धूम्रपान सख्ती से वर्जित है।",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::estimate;
    use crate::preserve::preserve;

    #[test]
    fn test_samples_survive_preservation() {
        for pair in SAMPLE_PAIRS {
            assert_eq!(preserve(pair.english, pair.hindi), pair.hindi);
        }
    }

    #[test]
    fn test_samples_score_high_confidence() {
        for pair in SAMPLE_PAIRS {
            assert!(estimate(pair.english, pair.hindi) >= 0.7, "{}", pair.english);
        }
    }
}
