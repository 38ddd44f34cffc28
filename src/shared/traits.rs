use crate::shared::error::CollectionError;

pub trait Collector {
    type Output;

    fn collect(&mut self) -> Result<Self::Output, CollectionError>;
}

pub trait Validatable {
    fn validate(&self) -> Result<(), String>;
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
