use super::Screen;
use crate::ui::data::ApplicationData;

const ABOUT_TEXT: &str = "Diese App berechnet die ungefähre Reichweite Ihres E-Bikes basierend auf \
Ihrem Gewicht, der Kapazität Ihres Akkus und dem Profil Ihrer Tour.";

pub struct InfoScreen;

impl Screen for InfoScreen {
    fn title(&self) -> String {
        String::from("Info")
    }

    fn content(&self, app_data: &ApplicationData) -> String {
        format!("{}\nCapacities are fetched from {}", ABOUT_TEXT, app_data.settings().capacity_url())
    }
}
