// Resume API: record CRUD, composition, PDF rendering, form editing and the sample record.

pub mod handlers;
