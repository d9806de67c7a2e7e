use crate::{Eligibility, RegionRecord};

/// Visual state of one geography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Default,
    HoveredEnabled,
    HoveredDisabled,
}

impl HoverState {
    pub fn class(&self) -> &'static str {
        match self {
            HoverState::Default => "geography",
            HoverState::HoveredEnabled => "geography hovered",
            HoverState::HoveredDisabled => "geography hovered-disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<'a> {
    Idle,
    Hovering(&'a str),
    ModalOpen(&'a RegionRecord),
}

/// Hover and modal state of the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub hovered: Option<String>,
    pub content: Option<RegionRecord>,
    pub modal_visible: bool,
}

impl Selection {
    pub fn phase(&self) -> Phase<'_> {
        match (&self.content, self.modal_visible, &self.hovered) {
            (Some(record), true, _) => Phase::ModalOpen(record),
            (_, _, Some(val)) => Phase::Hovering(val),
            _ => Phase::Idle,
        }
    }

    pub fn hover(&mut self, val: &str) {
        self.hovered = Some(val.to_string());
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hover_state(&self, val: &str, eligibility: &Eligibility) -> HoverState {
        match self.hovered.as_deref() {
            Some(h) if h == val && eligibility.is_eligible(val) => HoverState::HoveredEnabled,
            Some(h) if h == val => HoverState::HoveredDisabled,
            _ => HoverState::Default,
        }
    }

    /// Open the modal for the region with feature id `val` if it has
    /// content. Returns whether anything changed.
    pub fn click(&mut self, val: &str, eligibility: &Eligibility, regions: &[RegionRecord]) -> bool {
        if !eligibility.is_eligible(val) {
            return false;
        }
        let Some(record) = regions.iter().find(|r| r.val == val) else {
            return false;
        };

        self.content = Some(record.clone());
        self.modal_visible = true;
        true
    }

    pub fn close(&mut self) {
        self.modal_visible = false;
        self.content = None;
    }
}
