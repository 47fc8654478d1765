use service::Directory;

/// Shared handler state. Cheap to clone: services sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub directory: Directory,
}

impl AppState {
    pub fn new(directory: Directory) -> Self { Self { directory } }
}
