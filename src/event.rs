/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NextAmount,
    PreviousAmount,
    Replay,
    CopyAmount,
    StartEditing,
    InputChar(char),
    InputBackspace,
    SubmitInput,
    CancelInput,
}
