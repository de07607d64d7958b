use range_core::RangeEstimate;
use super::Screen;
use crate::ui::data::ApplicationData;

/// Shows a single estimate. Nothing is kept once the screen is left
pub struct ResultScreen {
    estimate: Option<RangeEstimate>
}

impl ResultScreen {
    pub(crate) fn new(estimate: Option<RangeEstimate>) -> Self {
        ResultScreen { estimate }
    }
}

impl Screen for ResultScreen {
    fn title(&self) -> String {
        String::from("Result")
    }

    fn content(&self, _app_data: &ApplicationData) -> String {
        match &self.estimate {
            None => String::from("No result calculated"),
            Some(estimate) if estimate.is_missing_weight() => {
                format!("{}\nEnter a weight greater than 0 kg to get a range.", estimate)
            }
            Some(estimate) => format!("{}\n({})", estimate, estimate.input())
        }
    }
}
