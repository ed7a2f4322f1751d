//! The closed set of widget kinds and their catalog grouping.

use serde::{Deserialize, Serialize};

/// Every kind of overlay widget the studio can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    TextAlert,
    VoiceAlert,
    VideoAlert,
    MiniAlert,
    Roulette,
    Poll,
    Quest,
    LuckyBox,
    Wishlist,
    PictureAlert,
    PlayAlert,
    Karaoke,
}

impl WidgetKind {
    /// Name given to a freshly added widget.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TextAlert => "텍스트 후원 알림",
            Self::VoiceAlert => "음성 후원 알림",
            Self::VideoAlert => "영상 후원 알림",
            Self::MiniAlert => "미니 후원 알림",
            Self::Roulette => "룰렛 후원",
            Self::Poll => "투표 알림",
            Self::Quest => "퀘스트 알림",
            Self::LuckyBox => "럭키박스 알림",
            Self::Wishlist => "위시리스트 알림",
            Self::PictureAlert => "그림 후원 알림",
            Self::PlayAlert => "플레이 후원 알림",
            Self::Karaoke => "노래방 후원 알림",
        }
    }

    pub fn category(self) -> WidgetCategory {
        match self {
            Self::TextAlert | Self::VoiceAlert | Self::VideoAlert | Self::MiniAlert => {
                WidgetCategory::Alerts
            }
            Self::Roulette | Self::Poll | Self::Quest | Self::LuckyBox => {
                WidgetCategory::Engagement
            }
            Self::Wishlist | Self::PictureAlert | Self::PlayAlert | Self::Karaoke => {
                WidgetCategory::Others
            }
        }
    }
}

/// Palette section a widget kind is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetCategory {
    Alerts,
    Engagement,
    Others,
}

impl WidgetCategory {
    pub fn title(self) -> &'static str {
        match self {
            Self::Alerts => "알림 (Alerts)",
            Self::Engagement => "참여 (Engagement)",
            Self::Others => "기타 (Others)",
        }
    }

    /// Kinds in this category, in palette order.
    pub fn kinds(self) -> &'static [WidgetKind] {
        use WidgetKind::*;
        match self {
            Self::Alerts => &[TextAlert, VoiceAlert, VideoAlert, MiniAlert],
            Self::Engagement => &[Roulette, Poll, Quest, LuckyBox],
            Self::Others => &[Wishlist, PictureAlert, PlayAlert, Karaoke],
        }
    }
}

/// All palette categories in display order.
pub const CATEGORIES: [WidgetCategory; 3] = [
    WidgetCategory::Alerts,
    WidgetCategory::Engagement,
    WidgetCategory::Others,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_kind_once() {
        let kinds: Vec<WidgetKind> = CATEGORIES.iter().flat_map(|c| c.kinds().iter().copied()).collect();
        assert_eq!(kinds.len(), 12);
        for kind in &kinds {
            assert_eq!(kinds.iter().filter(|k| *k == kind).count(), 1);
            assert!(kind.category().kinds().contains(kind));
        }
    }

    #[test]
    fn test_kebab_case_serialization() {
        let json = serde_json::to_string(&WidgetKind::LuckyBox).unwrap();
        assert_eq!(json, "\"lucky-box\"");
    }
}
