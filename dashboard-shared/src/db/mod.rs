/// Database layer
///
/// - `pool`: PostgreSQL connection pool creation and health check
///
/// Schema migrations are managed outside this repository.

pub mod pool;
