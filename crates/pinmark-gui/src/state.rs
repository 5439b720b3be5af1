use pinmark_core::io::intake::DecodeTicket;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Upload in flight (None = idle).
    pub pending_decode: Option<DecodeTicket>,

    /// Last decode error, shown on the upload prompt.
    pub upload_error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.pending_decode.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Canvas needs re-rendering before the next paint.
    pub dirty: bool,
}
