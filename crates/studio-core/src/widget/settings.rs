//! Typed per-kind widget settings.
//!
//! Each widget kind has its own settings record. Donation alerts share
//! [`AlertSettings`]; engagement widgets carry their own fields. Edits are
//! expressed as [`SettingsPatch`] values so the form can only set fields that
//! exist on the widget being edited.

use serde::{Deserialize, Serialize};

use super::kind::WidgetKind;
use crate::error::{StudioError, StudioResult};

/// Placement of the alert image relative to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertLayout {
    #[default]
    #[serde(rename = "img-top")]
    ImageTop,
    #[serde(rename = "img-left")]
    ImageLeft,
    #[serde(rename = "img-right")]
    ImageRight,
}

impl AlertLayout {
    pub const ALL: [AlertLayout; 3] = [Self::ImageTop, Self::ImageLeft, Self::ImageRight];

    pub fn label(self) -> &'static str {
        match self {
            Self::ImageTop => "img-top",
            Self::ImageLeft => "img-left",
            Self::ImageRight => "img-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationIn {
    #[default]
    FadeIn,
    SlideUp,
    ZoomIn,
    Bounce,
}

impl AnimationIn {
    pub const ALL: [AnimationIn; 4] = [Self::FadeIn, Self::SlideUp, Self::ZoomIn, Self::Bounce];

    pub fn label(self) -> &'static str {
        match self {
            Self::FadeIn => "Fade In",
            Self::SlideUp => "Slide Up",
            Self::ZoomIn => "Zoom In",
            Self::Bounce => "Bounce",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationOut {
    #[default]
    FadeOut,
    SlideDown,
    ZoomOut,
}

impl AnimationOut {
    pub const ALL: [AnimationOut; 3] = [Self::FadeOut, Self::SlideDown, Self::ZoomOut];

    pub fn label(self) -> &'static str {
        match self {
            Self::FadeOut => "Fade Out",
            Self::SlideDown => "Slide Down",
            Self::ZoomOut => "Zoom Out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnimation {
    None,
    #[default]
    Pulse,
    Wave,
    Wiggle,
}

impl TextAnimation {
    pub const ALL: [TextAnimation; 4] = [Self::None, Self::Pulse, Self::Wave, Self::Wiggle];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pulse => "Pulse",
            Self::Wave => "Wave",
            Self::Wiggle => "Wiggle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Pretendard,
    NotoSansKr,
    GmarketSans,
    Maplestory,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] = [
        Self::Pretendard,
        Self::NotoSansKr,
        Self::GmarketSans,
        Self::Maplestory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pretendard => "Pretendard",
            Self::NotoSansKr => "Noto Sans KR",
            Self::GmarketSans => "Gmarket Sans",
            Self::Maplestory => "Maplestory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [Self::Left, Self::Center, Self::Right];

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "왼쪽",
            Self::Center => "가운데",
            Self::Right => "오른쪽",
        }
    }
}

/// Text-to-speech voice for voice alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TtsVoice {
    #[default]
    Female,
    Male,
    Child,
}

impl TtsVoice {
    pub const ALL: [TtsVoice; 3] = [Self::Female, Self::Male, Self::Child];

    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "여성",
            Self::Male => "남성",
            Self::Child => "어린이",
        }
    }
}

/// Message, timing, and styling shared by every donation alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Smallest donation (in cash) that triggers the alert.
    pub min_amount: u64,
    pub layout: AlertLayout,
    pub animation_in: AnimationIn,
    pub animation_out: AnimationOut,
    pub text_animation: TextAnimation,
    /// Message with `{닉네임}` and `{금액}` placeholders.
    pub template: String,
    pub duration_secs: u32,
    pub font_family: FontFamily,
    pub font_size: u32,
    pub text_align: TextAlign,
    pub font_color: String,
    /// Color for the nickname and amount.
    pub highlight_color: String,
    /// 0-100.
    pub sound_volume: u8,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            min_amount: 0,
            layout: AlertLayout::ImageTop,
            animation_in: AnimationIn::FadeIn,
            animation_out: AnimationOut::FadeOut,
            text_animation: TextAnimation::Pulse,
            template: String::new(),
            duration_secs: 5,
            font_family: FontFamily::Pretendard,
            font_size: 36,
            text_align: TextAlign::Center,
            font_color: "#ffffff".to_string(),
            highlight_color: "#18C9FF".to_string(),
            sound_volume: 50,
        }
    }
}

/// Placeholder replaced by the donor's nickname.
pub const NICKNAME_VAR: &str = "{닉네임}";
/// Placeholder replaced by the donation amount.
pub const AMOUNT_VAR: &str = "{금액}";

impl AlertSettings {
    /// Fill in the template for a preview.
    pub fn render_message(&self, nickname: &str, amount: u64) -> String {
        self.template
            .replace(NICKNAME_VAR, nickname)
            .replace(AMOUNT_VAR, &format_amount(amount))
    }
}

/// Format an amount with thousands separators ("12,500").
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VoiceAlertSettings {
    pub alert: AlertSettings,
    pub voice: TtsVoice,
    /// Read the donation message aloud after the alert sound.
    pub read_message: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAlertSettings {
    pub alert: AlertSettings,
    /// Longest clip a donor may request.
    pub max_clip_secs: u32,
}

impl Default for VideoAlertSettings {
    fn default() -> Self {
        Self {
            alert: AlertSettings::default(),
            max_clip_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MiniAlertSettings {
    pub alert: AlertSettings,
    /// Single-line ticker instead of a card.
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouletteSettings {
    pub min_amount: u64,
    pub spin_secs: u32,
    pub items: Vec<String>,
}

impl Default for RouletteSettings {
    fn default() -> Self {
        Self {
            min_amount: 1000,
            spin_secs: 5,
            items: vec!["꽝".to_string(), "당첨".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollSettings {
    pub title: String,
    pub options: Vec<String>,
    pub duration_secs: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: vec!["1번".to_string(), "2번".to_string()],
            duration_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestSettings {
    pub title: String,
    pub goal_amount: u64,
    pub duration_secs: u32,
}

impl Default for QuestSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            goal_amount: 100_000,
            duration_secs: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuckyBoxSettings {
    pub min_amount: u64,
    pub prizes: Vec<String>,
}

impl Default for LuckyBoxSettings {
    fn default() -> Self {
        Self {
            min_amount: 3000,
            prizes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WishlistSettings {
    pub alert: AlertSettings,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureAlertSettings {
    pub alert: AlertSettings,
    /// How long the submitted drawing stays on screen.
    pub canvas_secs: u32,
}

impl Default for PictureAlertSettings {
    fn default() -> Self {
        Self {
            alert: AlertSettings::default(),
            canvas_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayAlertSettings {
    pub alert: AlertSettings,
    pub play_secs: u32,
}

impl Default for PlayAlertSettings {
    fn default() -> Self {
        Self {
            alert: AlertSettings::default(),
            play_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaraokeSettings {
    pub alert: AlertSettings,
    /// Songs that may be queued at once.
    pub song_limit: u32,
}

impl Default for KaraokeSettings {
    fn default() -> Self {
        Self {
            alert: AlertSettings::default(),
            song_limit: 5,
        }
    }
}

/// Settings for one widget, keyed by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WidgetSettings {
    TextAlert(AlertSettings),
    VoiceAlert(VoiceAlertSettings),
    VideoAlert(VideoAlertSettings),
    MiniAlert(MiniAlertSettings),
    Roulette(RouletteSettings),
    Poll(PollSettings),
    Quest(QuestSettings),
    LuckyBox(LuckyBoxSettings),
    Wishlist(WishlistSettings),
    PictureAlert(PictureAlertSettings),
    PlayAlert(PlayAlertSettings),
    Karaoke(KaraokeSettings),
}

impl WidgetSettings {
    /// Default settings for a newly added widget.
    pub fn defaults_for(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::TextAlert => Self::TextAlert(AlertSettings::default()),
            WidgetKind::VoiceAlert => Self::VoiceAlert(VoiceAlertSettings::default()),
            WidgetKind::VideoAlert => Self::VideoAlert(VideoAlertSettings::default()),
            WidgetKind::MiniAlert => Self::MiniAlert(MiniAlertSettings::default()),
            WidgetKind::Roulette => Self::Roulette(RouletteSettings::default()),
            WidgetKind::Poll => Self::Poll(PollSettings::default()),
            WidgetKind::Quest => Self::Quest(QuestSettings::default()),
            WidgetKind::LuckyBox => Self::LuckyBox(LuckyBoxSettings::default()),
            WidgetKind::Wishlist => Self::Wishlist(WishlistSettings::default()),
            WidgetKind::PictureAlert => Self::PictureAlert(PictureAlertSettings::default()),
            WidgetKind::PlayAlert => Self::PlayAlert(PlayAlertSettings::default()),
            WidgetKind::Karaoke => Self::Karaoke(KaraokeSettings::default()),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::TextAlert(_) => WidgetKind::TextAlert,
            Self::VoiceAlert(_) => WidgetKind::VoiceAlert,
            Self::VideoAlert(_) => WidgetKind::VideoAlert,
            Self::MiniAlert(_) => WidgetKind::MiniAlert,
            Self::Roulette(_) => WidgetKind::Roulette,
            Self::Poll(_) => WidgetKind::Poll,
            Self::Quest(_) => WidgetKind::Quest,
            Self::LuckyBox(_) => WidgetKind::LuckyBox,
            Self::Wishlist(_) => WidgetKind::Wishlist,
            Self::PictureAlert(_) => WidgetKind::PictureAlert,
            Self::PlayAlert(_) => WidgetKind::PlayAlert,
            Self::Karaoke(_) => WidgetKind::Karaoke,
        }
    }

    /// The shared alert settings, for kinds that are donation alerts.
    pub fn alert(&self) -> Option<&AlertSettings> {
        match self {
            Self::TextAlert(a) => Some(a),
            Self::VoiceAlert(s) => Some(&s.alert),
            Self::VideoAlert(s) => Some(&s.alert),
            Self::MiniAlert(s) => Some(&s.alert),
            Self::Wishlist(s) => Some(&s.alert),
            Self::PictureAlert(s) => Some(&s.alert),
            Self::PlayAlert(s) => Some(&s.alert),
            Self::Karaoke(s) => Some(&s.alert),
            Self::Roulette(_) | Self::Poll(_) | Self::Quest(_) | Self::LuckyBox(_) => None,
        }
    }

    pub fn alert_mut(&mut self) -> Option<&mut AlertSettings> {
        match self {
            Self::TextAlert(a) => Some(a),
            Self::VoiceAlert(s) => Some(&mut s.alert),
            Self::VideoAlert(s) => Some(&mut s.alert),
            Self::MiniAlert(s) => Some(&mut s.alert),
            Self::Wishlist(s) => Some(&mut s.alert),
            Self::PictureAlert(s) => Some(&mut s.alert),
            Self::PlayAlert(s) => Some(&mut s.alert),
            Self::Karaoke(s) => Some(&mut s.alert),
            Self::Roulette(_) | Self::Poll(_) | Self::Quest(_) | Self::LuckyBox(_) => None,
        }
    }

    fn with_alert(&mut self, f: impl FnOnce(&mut AlertSettings)) -> bool {
        match self.alert_mut() {
            Some(alert) => {
                f(alert);
                true
            }
            None => false,
        }
    }

    /// Apply one field update.
    ///
    /// Fails without changing anything if the field does not exist on this
    /// widget's kind.
    pub fn apply(&mut self, patch: SettingsPatch) -> StudioResult<()> {
        let kind = self.kind();
        let field = patch.field();

        let applied = match patch {
            SettingsPatch::MinAmount(v) => match self {
                Self::Roulette(s) => {
                    s.min_amount = v;
                    true
                }
                Self::LuckyBox(s) => {
                    s.min_amount = v;
                    true
                }
                other => other.with_alert(|a| a.min_amount = v),
            },
            SettingsPatch::DurationSecs(v) => match self {
                Self::Poll(s) => {
                    s.duration_secs = v;
                    true
                }
                Self::Quest(s) => {
                    s.duration_secs = v;
                    true
                }
                other => other.with_alert(|a| a.duration_secs = v),
            },
            SettingsPatch::Layout(v) => self.with_alert(|a| a.layout = v),
            SettingsPatch::AnimationIn(v) => self.with_alert(|a| a.animation_in = v),
            SettingsPatch::AnimationOut(v) => self.with_alert(|a| a.animation_out = v),
            SettingsPatch::TextAnimation(v) => self.with_alert(|a| a.text_animation = v),
            SettingsPatch::Template(v) => self.with_alert(|a| a.template = v),
            SettingsPatch::FontFamily(v) => self.with_alert(|a| a.font_family = v),
            SettingsPatch::FontSize(v) => self.with_alert(|a| a.font_size = v),
            SettingsPatch::TextAlign(v) => self.with_alert(|a| a.text_align = v),
            SettingsPatch::FontColor(v) => self.with_alert(|a| a.font_color = v),
            SettingsPatch::HighlightColor(v) => self.with_alert(|a| a.highlight_color = v),
            SettingsPatch::SoundVolume(v) => self.with_alert(|a| a.sound_volume = v.min(100)),
            SettingsPatch::Voice(v) => match self {
                Self::VoiceAlert(s) => {
                    s.voice = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::ReadMessage(v) => match self {
                Self::VoiceAlert(s) => {
                    s.read_message = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::MaxClipSecs(v) => match self {
                Self::VideoAlert(s) => {
                    s.max_clip_secs = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::Compact(v) => match self {
                Self::MiniAlert(s) => {
                    s.compact = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::SpinSecs(v) => match self {
                Self::Roulette(s) => {
                    s.spin_secs = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::Items(v) => match self {
                Self::Roulette(s) => {
                    s.items = v;
                    true
                }
                Self::Poll(s) => {
                    s.options = v;
                    true
                }
                Self::LuckyBox(s) => {
                    s.prizes = v;
                    true
                }
                Self::Wishlist(s) => {
                    s.items = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::Title(v) => match self {
                Self::Poll(s) => {
                    s.title = v;
                    true
                }
                Self::Quest(s) => {
                    s.title = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::GoalAmount(v) => match self {
                Self::Quest(s) => {
                    s.goal_amount = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::CanvasSecs(v) => match self {
                Self::PictureAlert(s) => {
                    s.canvas_secs = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::PlaySecs(v) => match self {
                Self::PlayAlert(s) => {
                    s.play_secs = v;
                    true
                }
                _ => false,
            },
            SettingsPatch::SongLimit(v) => match self {
                Self::Karaoke(s) => {
                    s.song_limit = v;
                    true
                }
                _ => false,
            },
        };

        if applied {
            Ok(())
        } else {
            Err(StudioError::UnsupportedSetting { kind, field })
        }
    }
}

/// A single settings field update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsPatch {
    MinAmount(u64),
    Layout(AlertLayout),
    AnimationIn(AnimationIn),
    AnimationOut(AnimationOut),
    TextAnimation(TextAnimation),
    Template(String),
    DurationSecs(u32),
    FontFamily(FontFamily),
    FontSize(u32),
    TextAlign(TextAlign),
    FontColor(String),
    HighlightColor(String),
    SoundVolume(u8),
    Voice(TtsVoice),
    ReadMessage(bool),
    MaxClipSecs(u32),
    Compact(bool),
    SpinSecs(u32),
    Items(Vec<String>),
    Title(String),
    GoalAmount(u64),
    CanvasSecs(u32),
    PlaySecs(u32),
    SongLimit(u32),
}

impl SettingsPatch {
    /// Name of the field this patch writes.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MinAmount(_) => "min_amount",
            Self::Layout(_) => "layout",
            Self::AnimationIn(_) => "animation_in",
            Self::AnimationOut(_) => "animation_out",
            Self::TextAnimation(_) => "text_animation",
            Self::Template(_) => "template",
            Self::DurationSecs(_) => "duration_secs",
            Self::FontFamily(_) => "font_family",
            Self::FontSize(_) => "font_size",
            Self::TextAlign(_) => "text_align",
            Self::FontColor(_) => "font_color",
            Self::HighlightColor(_) => "highlight_color",
            Self::SoundVolume(_) => "sound_volume",
            Self::Voice(_) => "voice",
            Self::ReadMessage(_) => "read_message",
            Self::MaxClipSecs(_) => "max_clip_secs",
            Self::Compact(_) => "compact",
            Self::SpinSecs(_) => "spin_secs",
            Self::Items(_) => "items",
            Self::Title(_) => "title",
            Self::GoalAmount(_) => "goal_amount",
            Self::CanvasSecs(_) => "canvas_secs",
            Self::PlaySecs(_) => "play_secs",
            Self::SongLimit(_) => "song_limit",
        }
    }
}
