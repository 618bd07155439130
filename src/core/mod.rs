mod value;
pub use value::*;

mod property_key;
pub use property_key::*;

mod descriptor;
pub use descriptor::*;

mod object;
pub use object::*;

mod function;
pub use function::*;

mod realm;
pub use realm::*;

mod object_ops;

mod conversion;
pub use conversion::*;

pub mod number;
