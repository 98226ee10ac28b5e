//! Concrete compressive-strength testing: samples, journal and protocol

pub mod derivation;
pub mod form;
pub mod journal;
pub mod protocol;
pub mod sample;

pub use derivation::{compressive_strength, working_area};
pub use form::SampleForm;
pub use journal::{CLEAR_PROMPT, Confirmation, Journal, JournalState};
pub use protocol::{ProtocolRenderer, ProtocolReport, ProtocolSummary, count_label};
pub use sample::{ConcreteClass, Dimensions, MaterialType, Sample, SampleShape};

use crate::config::LabConfig;
use crate::core::{DocumentSink, LabError, Notice, RenderedDocument};

/// Owner of the journal, the single entry form and the protocol renderer
pub struct Laboratory {
    journal: Journal,
    form: SampleForm,
    renderer: ProtocolRenderer,
}

impl Laboratory {
    pub fn new(config: &LabConfig) -> Result<Self, LabError> {
        Ok(Self {
            journal: Journal::new(),
            form: SampleForm::default(),
            renderer: ProtocolRenderer::new(config)?,
        })
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn form(&self) -> &SampleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SampleForm {
        &mut self.form
    }

    /// Submit the entry form into the journal
    ///
    /// Failures come back as a destructive notice; the form keeps its values.
    pub fn submit_sample(&mut self) -> Notice {
        match self.form.submit(&mut self.journal) {
            Ok(notice) => notice,
            Err(e) => Notice::from_error(&e),
        }
    }

    pub fn clear_journal(&mut self, confirmation: &impl Confirmation) -> bool {
        self.journal.clear(confirmation)
    }

    /// Render the protocol over the journal and open it in `sink`
    ///
    /// Returns `Ok(None)` while the journal is empty.
    pub fn generate_protocol(
        &self,
        sink: &dyn DocumentSink,
    ) -> Result<Option<RenderedDocument>, LabError> {
        match self.journal.protocol() {
            Some(report) => self.renderer.publish(&report, sink).map(Some),
            None => Ok(None),
        }
    }
}
