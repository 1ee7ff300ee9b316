use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;

    /// While `true`, a bare `exit` goes to the flow instead of ending the loop.
    fn captures_exit(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddItemState {
    AskName,
    AskQuantity,
    AskCategory,
    AskPrice,
    Done,
}
