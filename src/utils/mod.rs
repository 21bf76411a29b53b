pub mod response;
pub mod supabase;
