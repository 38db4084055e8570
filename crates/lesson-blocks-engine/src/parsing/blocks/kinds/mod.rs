pub mod annotation;
pub mod bullet;
pub mod numbered;

pub use annotation::Annotation;
pub use bullet::BulletItem;
pub use numbered::NumberedItem;
