use uuid::Uuid;

/// Context handed to the confirmation collaborator before a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub id: Uuid,
    pub name: String,
}

impl ConfirmationPrompt {
    pub fn message(&self) -> String {
        format!("Bạn có chắc chắn muốn xóa khách hàng {}?", self.name)
    }
}

/// Synchronous yes/no answer from whoever owns the user interaction.
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&ConfirmationPrompt) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        self(prompt)
    }
}
