//! @acp:module "Channels"
//! @acp:summary "Ad placement surfaces and their field layouts"
//! @acp:domain copy
//! @acp:layer model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::FieldKind;
use crate::error::AdCopyError;

/// @acp:summary "Ad placement surface with its own copy rules"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Search banner (title + description)
    Naver,
    /// Chat-app board banner (main + sub text)
    Kakao,
    /// Social feed lead ad
    Social,
    /// Landing page hook
    Landing,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Naver,
        Channel::Kakao,
        Channel::Social,
        Channel::Landing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Naver => "naver",
            Channel::Kakao => "kakao",
            Channel::Social => "social",
            Channel::Landing => "landing",
        }
    }

    /// Fields a copy item for this channel is split into, in display order
    pub fn fields(&self) -> &'static [FieldKind] {
        match self {
            Channel::Naver => &[FieldKind::Title, FieldKind::Description],
            Channel::Kakao => &[FieldKind::Main, FieldKind::Sub],
            Channel::Social | Channel::Landing => &[FieldKind::Full],
        }
    }
}

impl FromStr for Channel {
    type Err = AdCopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naver" => Ok(Channel::Naver),
            "kakao" => Ok(Channel::Kakao),
            "social" => Ok(Channel::Social),
            "landing" => Ok(Channel::Landing),
            _ => Err(AdCopyError::UnknownChannel(s.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_round_trip_names() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
        assert!(matches!(
            "tiktok".parse::<Channel>(),
            Err(AdCopyError::UnknownChannel(_))
        ));
    }

    #[test]
    fn test_channel_fields() {
        assert_eq!(Channel::Naver.fields(), [FieldKind::Title, FieldKind::Description]);
        assert_eq!(Channel::Kakao.fields(), [FieldKind::Main, FieldKind::Sub]);
        assert_eq!(Channel::Landing.fields(), [FieldKind::Full]);
    }
}
