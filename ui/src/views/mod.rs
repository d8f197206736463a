mod features;
pub use features::Features;

mod info;
pub use info::{Info, NotFound};

mod landing;
pub use landing::Landing;
