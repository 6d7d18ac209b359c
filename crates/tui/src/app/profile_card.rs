//! Profile card controller.
//!
//! Responsibilities:
//! - Track which roster trigger (if any) the pointer is over and apply
//!   the hover emphasis to it.
//! - Populate the shared card from the hovered member's payload, with
//!   presentation fallbacks for absent fields.
//! - Position the card relative to the trigger and keep it alive while
//!   the pointer transfers from trigger to card (debounced hide).
//!
//! Does NOT handle:
//! - Raw mouse decoding or hit-testing (see `app::mouse`).
//! - Rendering (see `ui::components::profile_card`).

use std::time::{Duration, Instant};

use cohort_config::MemberSpec;
use cohort_config::constants::{
    CARD_GAP_COLS, CARD_HIDE_DELAY_MS, CARD_VERTICAL_OFFSET_ROWS, CARD_WIDTH,
};
use ratatui::layout::Rect;

use crate::timer::DelayTimer;
use crate::ui::text::wrap_text;

/// Maximum rendered bio rows before truncation.
pub const BIO_MAX_ROWS: usize = 3;

/// What the pointer is currently over, as decided by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A roster trigger row, with its on-screen area.
    Trigger { index: usize, area: Rect },
    /// The profile card itself.
    Card,
    /// Anything else.
    Elsewhere,
}

/// Simplified region used to detect enter/leave transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverRegion {
    Trigger(usize),
    Card,
    Elsewhere,
}

/// Avatar presentation: a configured glyph, or an initial-letter badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView {
    Glyph(String),
    Initial(char),
}

/// Card content derived from a member payload, fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub stars: String,
    pub progress: String,
    pub avatar: AvatarView,
    /// Omitted from the card entirely when the member has no bio.
    pub bio: Option<String>,
    /// Omitted from the card entirely when the member has no joined date.
    pub joined: Option<String>,
}

impl CardContent {
    /// Derive card content from a member payload.
    ///
    /// Fallbacks: name "Unknown", role "Student", stars "0", progress
    /// "0%". A blank avatar/bio counts as absent.
    pub fn from_member(member: &MemberSpec) -> Self {
        let name = if member.name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            member.name.clone()
        };
        let role = if member.role.trim().is_empty() {
            "Student".to_string()
        } else {
            member.role.clone()
        };
        let avatar = match member.avatar.as_deref().map(str::trim) {
            Some(glyph) if !glyph.is_empty() => AvatarView::Glyph(glyph.to_string()),
            _ => {
                let initial = name
                    .chars()
                    .next()
                    .and_then(|c| c.to_uppercase().next())
                    .unwrap_or('?');
                AvatarView::Initial(initial)
            }
        };
        let bio = member
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        let joined = member.joined.map(|date| date.format("%b %Y").to_string());

        Self {
            name,
            username: member.username.clone(),
            email: member.email.clone(),
            role,
            stars: member.stars.unwrap_or(0).to_string(),
            progress: format!("{}%", member.progress.unwrap_or(0)),
            avatar,
            bio,
            joined,
        }
    }

    /// Number of content rows the card body needs at `inner_width`.
    pub fn body_rows(&self, inner_width: usize) -> u16 {
        let mut rows = 4u16; // name, handle/role, email, stars/progress
        if let Some(bio) = &self.bio {
            rows += wrap_text(bio, inner_width).len().min(BIO_MAX_ROWS) as u16;
        }
        if self.joined.is_some() {
            rows += 1;
        }
        rows
    }
}

/// The populated, positioned card currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Index of the trigger this card was populated from.
    pub trigger: usize,
    pub content: CardContent,
    /// On-screen area, borders included.
    pub area: Rect,
}

/// Compute the card area for a trigger.
///
/// The card's bottom edge lands near the trigger's vertical center and the
/// card sits just right of the trigger, both clamped into the frame.
pub fn position_card(trigger: Rect, width: u16, height: u16, frame: Rect) -> Rect {
    let center_y = trigger.y + trigger.height / 2;
    let top = (center_y + CARD_VERTICAL_OFFSET_ROWS).saturating_sub(height);
    let left = trigger.right().saturating_add(CARD_GAP_COLS);

    let width = width.min(frame.width);
    let height = height.min(frame.height);
    let max_left = frame.right().saturating_sub(width);
    let max_top = frame.bottom().saturating_sub(height);

    Rect::new(
        left.clamp(frame.x, max_left.max(frame.x)),
        top.clamp(frame.y, max_top.max(frame.y)),
        width,
        height,
    )
}

/// Controller for the shared profile card.
pub struct ProfileCardController {
    members: Vec<MemberSpec>,
    enabled: bool,
    hovered_trigger: Option<usize>,
    view: Option<CardView>,
    hide_timer: DelayTimer,
    last_region: HoverRegion,
}

impl ProfileCardController {
    /// Build the controller from the configured roster.
    ///
    /// With an empty roster there is nothing to attach to: the controller
    /// disables itself with a diagnostic log and every call is a no-op.
    pub fn new(members: Vec<MemberSpec>) -> Self {
        let enabled = !members.is_empty();
        if !enabled {
            tracing::warn!("profile card disabled: no roster members configured");
        }
        Self {
            members,
            enabled,
            hovered_trigger: None,
            view: None,
            hide_timer: DelayTimer::new(),
            last_region: HoverRegion::Elsewhere,
        }
    }

    /// The configured roster.
    pub fn members(&self) -> &[MemberSpec] {
        &self.members
    }

    /// Whether the controller attached to a roster at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The trigger currently under the pointer (for hover emphasis).
    pub fn hovered_trigger(&self) -> Option<usize> {
        self.hovered_trigger
    }

    /// The card currently on screen, if any.
    pub fn view(&self) -> Option<&CardView> {
        self.view.as_ref()
    }

    /// The card's on-screen area, if visible.
    pub fn card_area(&self) -> Option<Rect> {
        self.view.as_ref().map(|v| v.area)
    }

    /// Whether a hide is scheduled but not yet due.
    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// Feed the pointer's current target. Enter/leave transitions are
    /// derived from the previous call.
    pub fn pointer_moved(&mut self, target: PointerTarget, frame: Rect, now: Instant) {
        if !self.enabled {
            return;
        }
        let region = match target {
            PointerTarget::Trigger { index, .. } if index < self.members.len() => {
                HoverRegion::Trigger(index)
            }
            PointerTarget::Trigger { .. } | PointerTarget::Elsewhere => HoverRegion::Elsewhere,
            PointerTarget::Card => HoverRegion::Card,
        };
        if region == self.last_region {
            return;
        }

        if matches!(self.last_region, HoverRegion::Trigger(_)) {
            self.hovered_trigger = None;
        }

        match region {
            HoverRegion::Trigger(index) => {
                let PointerTarget::Trigger { area, .. } = target else {
                    return;
                };
                self.hide_timer.cancel();
                self.show_for(index, area, frame);
                self.hovered_trigger = Some(index);
            }
            HoverRegion::Card => {
                self.hide_timer.cancel();
            }
            HoverRegion::Elsewhere => {
                if self.view.is_some() {
                    self.hide_timer
                        .schedule(now, Duration::from_millis(CARD_HIDE_DELAY_MS));
                }
            }
        }

        self.last_region = region;
    }

    /// Populate and position the card for the member at `index`.
    pub fn show_for(&mut self, index: usize, trigger: Rect, frame: Rect) {
        let Some(member) = self.members.get(index) else {
            return;
        };
        let content = CardContent::from_member(member);
        let width = CARD_WIDTH;
        let height = content.body_rows(width.saturating_sub(2) as usize) + 2;
        let area = position_card(trigger, width, height, frame);
        self.view = Some(CardView {
            trigger: index,
            content,
            area,
        });
    }

    /// Hide immediately (close control or outside click).
    pub fn close(&mut self) {
        self.view = None;
        self.hide_timer.cancel();
        self.last_region = HoverRegion::Elsewhere;
    }

    /// A click that landed neither on the card nor on a trigger.
    pub fn outside_click(&mut self) {
        if self.view.is_some() {
            self.close();
        }
    }

    /// Advance the debounced hide. Called from the UI tick.
    pub fn tick(&mut self, now: Instant) {
        if self.hide_timer.fire_if_due(now) {
            self.view = None;
        }
    }
}
