/// Top-level actions offered by the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Swap,
    SendNative,
}
