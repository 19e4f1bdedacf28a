mod create_site;
mod delete_site;
mod get_sites;

pub use create_site::CreateSiteUseCase;
pub use delete_site::DeleteSiteUseCase;
pub use get_sites::GetSitesUseCase;
