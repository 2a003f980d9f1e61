use crate::model::SiteSummary;
use crate::presentation;
use crate::service::BatteryService;

/// Loaded dashboard state, owned by the caller and passed by reference.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub sites: Vec<SiteSummary>,
    pub selected_site: Option<SiteSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Reloads every site summary from the service.
    ///
    /// On failure the previous sites are kept and the error message is
    /// stored in `error`.
    pub async fn fetch_sites(&mut self, service: &BatteryService) {
        self.loading = true;
        self.error = None;

        match service.site_summaries().await {
            Ok(sites) => {
                tracing::info!(sites = sites.len(), "Loaded site summaries");
                self.sites = sites;
            }
            Err(e) => {
                tracing::error!("Error fetching sites: {:?}", e);
                self.error = Some(error_message(&e, "Failed to load sites"));
            }
        }

        self.loading = false;
    }

    /// Selects a site, reusing an already loaded summary when there is one.
    pub async fn select_site(&mut self, service: &BatteryService, site_id: i64) {
        if let Some(existing) = self.find_site(site_id).cloned() {
            self.selected_site = Some(existing);
            return;
        }

        self.loading = true;
        self.error = None;

        match service.site_detail(site_id).await {
            Ok(Some(site)) => self.selected_site = Some(site),
            Ok(None) => self.error = Some(format!("Site with ID {} not found", site_id)),
            Err(e) => {
                tracing::error!(site_id, "Error fetching site details: {:?}", e);
                self.error = Some(error_message(&e, "Failed to load site details"));
            }
        }

        self.loading = false;
    }

    pub fn clear_selected_site(&mut self) {
        self.selected_site = None;
    }

    pub fn total_unhealthy_devices(&self) -> usize {
        self.sites.iter().map(|site| site.unhealthy_count).sum()
    }

    /// Sites by unhealthy count, highest first, without reordering `sites`.
    pub fn sites_ranked(&self) -> Vec<SiteSummary> {
        let mut ranked = self.sites.clone();
        ranked.sort_by(|a, b| b.unhealthy_count.cmp(&a.unhealthy_count));
        ranked
    }

    /// Sites with at least one device that needs replacement.
    pub fn high_priority_sites(&self) -> Vec<&SiteSummary> {
        self.sites
            .iter()
            .filter(|site| site.unhealthy_count > 0)
            .collect()
    }

    pub fn find_site(&self, site_id: i64) -> Option<&SiteSummary> {
        presentation::find_site(&self.sites, site_id)
    }
}

fn error_message(err: &dyn std::error::Error, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
