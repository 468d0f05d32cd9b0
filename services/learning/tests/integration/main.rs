mod helpers;

mod authz_test;
mod cascade_test;
mod manager_test;
mod progress_test;
