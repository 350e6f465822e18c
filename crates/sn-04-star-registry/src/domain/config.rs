/// Largest accepted star story, in bytes of ASCII text.
pub const DEFAULT_MAX_STORY_BYTES: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub max_story_bytes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_story_bytes: DEFAULT_MAX_STORY_BYTES,
        }
    }
}

impl RegistryConfig {
    pub fn with_max_story_bytes(mut self, bytes: usize) -> Self {
        self.max_story_bytes = bytes;
        self
    }
}
