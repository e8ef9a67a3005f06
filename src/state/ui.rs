#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::catalog::VendorFilter;

/// Directory page UI state: search form, applied filter, and open dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Values currently chosen in the search selects.
    pub draft_filter: VendorFilter,
    /// Filter applied to the vendor grid by the last search.
    pub filter: VendorFilter,
    /// Vendor whose profile modal is open.
    pub profile_vendor: Option<u32>,
    /// Vendor whose chat modal is open.
    pub chat_vendor: Option<u32>,
}

impl UiState {
    /// Apply the drafted search criteria to the grid.
    pub fn run_search(&mut self) {
        self.filter = self.draft_filter.clone();
    }

    pub fn clear_search(&mut self) {
        self.draft_filter = VendorFilter::default();
        self.filter = VendorFilter::default();
    }

    pub fn open_profile(&mut self, vendor_id: u32) {
        self.profile_vendor = Some(vendor_id);
    }

    /// Open the chat for `vendor_id`, closing the profile modal if it was
    /// the one that asked.
    pub fn open_chat(&mut self, vendor_id: u32) {
        self.profile_vendor = None;
        self.chat_vendor = Some(vendor_id);
    }

    pub fn close_dialogs(&mut self) {
        self.profile_vendor = None;
        self.chat_vendor = None;
    }
}
