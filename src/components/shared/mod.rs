pub mod instruction_footer;
pub mod toast;

pub use instruction_footer::InstructionFooter;
pub use toast::Toast;
