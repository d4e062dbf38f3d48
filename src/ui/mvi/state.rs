/// Marker for screen state.
///
/// `Default` is the freshly mounted value; `App` relies on it to move state
/// through a reducer with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
