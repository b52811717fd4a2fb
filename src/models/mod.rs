pub mod country;
pub mod population;
pub mod response;
pub mod status;
