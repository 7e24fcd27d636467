//! Coded enum domains for member categorical fields
//!
//! Every categorical field is a closed set of named integer codes. Values
//! serialize as the bare code; the server may also send label strings, which
//! [`CodedEnum::from_label`] matches case-insensitively. Each domain carries
//! a documented fallback used when upstream data is unrecognized:
//!
//! | Domain                  | Fallback        |
//! |-------------------------|-----------------|
//! | Gender                  | Male            |
//! | CivilStatus             | Single          |
//! | MembershipType          | Regular         |
//! | MemberStatus            | Active          |
//! | RelationshipType        | Spouse          |
//! | EducationAttainmentType | CollegeGraduate |
//! | BenefitType             | Other           |
//! | AddressType             | Home            |

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Closed integer-coded enum domain
pub trait CodedEnum: Copy + Eq + Sized + 'static {
    /// Value used when input cannot be recognized
    const FALLBACK: Self;
    /// Domain name, used in logs and defaulted-field reports
    const DOMAIN: &'static str;

    /// Numeric wire code
    fn code(self) -> i64;
    /// Resolve a numeric code, `None` if outside the domain
    fn from_code(code: i64) -> Option<Self>;
    /// Resolve a label string case-insensitively, `None` on no match
    fn from_label(label: &str) -> Option<Self>;
    /// Canonical display label
    fn label(self) -> &'static str;
}

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $code:literal => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
        fallback = $fallback:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $variant = $code, )+
        }

        impl CodedEnum for $name {
            const FALLBACK: Self = Self::$fallback;
            const DOMAIN: &'static str = stringify!($name);

            fn code(self) -> i64 {
                self as i64
            }

            fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn from_label(label: &str) -> Option<Self> {
                let needle = label.trim();
                [
                    $(
                        (Self::$variant, $label),
                        $( (Self::$variant, $alias), )*
                    )+
                ]
                .into_iter()
                .find(|(_, l)| l.eq_ignore_ascii_case(needle))
                .map(|(v, _)| v)
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = i64::deserialize(deserializer)?;
                Self::from_code(code).ok_or_else(|| {
                    de::Error::custom(format!("invalid {} code: {}", Self::DOMAIN, code))
                })
            }
        }
    };
}

coded_enum! {
    /// Member gender
    Gender {
        Male = 1 => "Male" | "M",
        Female = 2 => "Female" | "F",
    }
    fallback = Male
}

coded_enum! {
    /// Civil status
    CivilStatus {
        Single = 1 => "Single",
        Married = 2 => "Married",
        Widowed = 3 => "Widowed",
        Separated = 4 => "Separated",
        Divorced = 5 => "Divorced",
    }
    fallback = Single
}

coded_enum! {
    /// Membership classification
    MembershipType {
        Regular = 1 => "Regular",
        Associate = 2 => "Associate",
    }
    fallback = Regular
}

coded_enum! {
    /// Member account status
    MemberStatus {
        Active = 1 => "Active",
        Inactive = 2 => "Inactive",
        Terminated = 3 => "Terminated",
    }
    fallback = Active
}

coded_enum! {
    /// Dependent relationship to the member
    RelationshipType {
        Spouse = 1 => "Spouse",
        Child = 2 => "Child" | "Son" | "Daughter",
        Parent = 3 => "Parent" | "Father" | "Mother",
        Sibling = 4 => "Sibling" | "Brother" | "Sister",
        Other = 5 => "Other",
    }
    fallback = Spouse
}

coded_enum! {
    /// Highest educational attainment
    EducationAttainmentType {
        Elementary = 1 => "Elementary",
        HighSchool = 2 => "High School" | "Highschool",
        Vocational = 3 => "Vocational",
        CollegeUndergraduate = 4 => "College Undergraduate" | "College Level",
        CollegeGraduate = 5 => "College Graduate",
        PostGraduate = 6 => "Post Graduate" | "Postgraduate" | "Masters" | "Doctorate",
    }
    fallback = CollegeGraduate
}

coded_enum! {
    /// Beneficiary benefit coverage
    BenefitType {
        LifeInsurance = 1 => "Life Insurance" | "Life",
        Medical = 2 => "Medical",
        Burial = 3 => "Burial" | "Memorial",
        Other = 4 => "Other",
    }
    fallback = Other
}

coded_enum! {
    /// Address classification
    AddressType {
        Home = 1 => "Home",
        Work = 2 => "Work" | "Office",
        Provincial = 3 => "Provincial",
    }
    fallback = Home
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(CivilStatus::from_code(CivilStatus::Widowed.code()), Some(CivilStatus::Widowed));
        assert_eq!(Gender::from_code(2), Some(Gender::Female));
        assert_eq!(Gender::from_code(99), None);
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(CivilStatus::from_label("married"), Some(CivilStatus::Married));
        assert_eq!(CivilStatus::from_label("  MARRIED "), Some(CivilStatus::Married));
        assert_eq!(RelationshipType::from_label("daughter"), Some(RelationshipType::Child));
        assert_eq!(EducationAttainmentType::from_label("college level"), Some(EducationAttainmentType::CollegeUndergraduate));
        assert_eq!(CivilStatus::from_label("betrothed"), None);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Gender::FALLBACK, Gender::Male);
        assert_eq!(RelationshipType::FALLBACK, RelationshipType::Spouse);
        assert_eq!(BenefitType::FALLBACK, BenefitType::Other);
        assert_eq!(EducationAttainmentType::FALLBACK, EducationAttainmentType::CollegeGraduate);
        assert_eq!(MemberStatus::default(), MemberStatus::Active);
    }

    #[test]
    fn test_serialize_as_code() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "2");
        assert_eq!(serde_json::to_string(&BenefitType::Burial).unwrap(), "3");
    }

    #[test]
    fn test_deserialize_from_code() {
        let status: MemberStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, MemberStatus::Terminated);
        assert!(serde_json::from_str::<MemberStatus>("7").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AddressType::Provincial.label(), "Provincial");
        assert_eq!(EducationAttainmentType::PostGraduate.label(), "Post Graduate");
    }
}
