/// Item that can be picked from a list
pub trait AggregatePickerResult {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}

/// Item shown as a two-column row in the picker table
pub trait TableDisplayable: AggregatePickerResult {
    fn code(&self) -> String;
    fn description(&self) -> String;
}
