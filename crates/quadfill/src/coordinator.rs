//! End-to-end orchestration of one mapping run.
//!
//! The coordinator drives the flow from selection check to applied image
//! fill: check the selection, build the artboard catalog, obtain the user's
//! choice, validate the shape, invoke the perspective engine, apply the
//! result. Every run terminates in exactly one [`RunOutcome`]; early exits
//! are either silent (user cancel, nothing selected) or carry exactly one
//! user-facing message.

use std::rc::Rc;

use log::{debug, info, trace, warn};

use quadfill_core::validate::{QuadValidator, ShapeRejection};

use crate::{
    catalog::ArtboardCatalog,
    config::AppConfig,
    host::{HostContext, MappingRequest, Shape},
};

/// Message shown when more than one element is selected.
pub const MSG_SELECT_ONE: &str = "Please, select only one element at a time.";

/// Message shown after the image fill has been applied.
pub const MSG_SUCCESS: &str = "Artboard mirrored into the selected shape.";

/// Terminal state of a coordinator run.
///
/// Each variant corresponds to one exit of the flow's state machine; there
/// are no retries and no other exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The host reported no selection; nothing to do.
    NothingSelected,
    /// More than one element was selected; the user was told to pick one.
    MultipleSelected,
    /// The document has no artboards to offer.
    NoArtboards,
    /// The user dismissed the artboard picker.
    Cancelled,
    /// The selected shape is not an eligible quadrilateral target.
    Rejected(ShapeRejection),
    /// The perspective engine declined the shape/artboard pair.
    EngineDeclined,
    /// The image fill was applied.
    Applied,
}

/// Drives one selection-to-mapping run against an injected host.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    config: AppConfig,
}

impl SelectionCoordinator {
    /// Creates a coordinator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs the full flow once.
    ///
    /// The host document is only mutated in the final apply step, and only
    /// through `MappingOutcome::add_image_fill`; every earlier step is a
    /// pure read of host state.
    pub fn run(&self, host: &HostContext<'_>) -> RunOutcome {
        let Some(selection) = host.document().selection() else {
            return RunOutcome::NothingSelected;
        };

        if selection.is_empty() {
            return RunOutcome::NothingSelected;
        }

        if selection.len() != 1 {
            host.messenger().show_message(MSG_SELECT_ONE);
            return RunOutcome::MultipleSelected;
        }

        let selected = Rc::clone(&selection[0]);

        let catalog = ArtboardCatalog::scan(host.document());
        if catalog.is_empty() {
            warn!("Document has no artboards to offer");
            return RunOutcome::NoArtboards;
        }

        let names = catalog.names();
        let response = host.chooser().present(&names);
        if !response.is_confirmed() {
            debug!("Close");
            return RunOutcome::Cancelled;
        }

        // The picker's index refers into the same ordered catalog the names
        // were taken from.
        let Some(entry) = catalog.get(response.selected_index()) else {
            warn!(
                selected_index = response.selected_index(),
                catalog_len = catalog.len();
                "Picker returned an out-of-range index"
            );
            return RunOutcome::Cancelled;
        };

        info!(artboard = entry.name(); "Artboard chosen");

        if let Some(rejection) = self.check_shape(selected.as_ref()) {
            host.messenger().show_message(&rejection.to_string());
            return RunOutcome::Rejected(rejection);
        }

        let request = MappingRequest::new(Rc::clone(&selected), entry.artboard());
        let Some(outcome) = host.engine().angle_for(request) else {
            debug!("Perspective engine declined the mapping");
            return RunOutcome::EngineDeclined;
        };

        outcome.add_image_fill();
        host.messenger().show_message(MSG_SUCCESS);

        info!(artboard = entry.name(); "Image fill applied");
        RunOutcome::Applied
    }

    /// Validates the selected shape, logging its outline for diagnosis.
    fn check_shape(&self, shape: &dyn Shape) -> Option<ShapeRejection> {
        let outline = shape.outline();

        if !outline.is_closed() {
            debug!("Selected shape outline is not a single closed path");
        }

        if log::log_enabled!(log::Level::Trace) {
            for line in outline.describe_all() {
                trace!("{line}");
            }
        }

        let validator = QuadValidator::new(self.config.validation().clone());
        validator.validate(&shape.boundary_points()).err()
    }
}
