use reqwest::{Client, RequestBuilder, header};
use tracing::info;
use url::Url;

/// Media type asking PostgREST for exactly one row as a bare object. Zero or
/// several matches are answered with 406.
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Authenticated access to the project's REST endpoint with the service key.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    rest_base: Url,
    service_key: String,
}

impl SupabaseClient {
    pub fn new(project_url: &Url, service_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut rest_base = project_url.clone();
        let path = format!("{}/rest/v1/", project_url.path().trim_end_matches('/'));
        rest_base.set_path(&path);

        info!("✅ Supabase REST client ready for {}", rest_base);

        Ok(Self {
            client,
            rest_base,
            service_key: service_key.to_string(),
        })
    }

    /// URL of a table resource, e.g. `{project}/rest/v1/videos`.
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.rest_base.clone();
        let path = format!("{}{}", self.rest_base.path(), table);
        url.set_path(&path);
        url
    }

    /// GET on `table` filtered by `column = value`, expecting a single row.
    pub fn select_single(&self, table: &str, column: &str, value: &str) -> RequestBuilder {
        let mut url = self.table_url(table);
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair(column, &format!("eq.{}", value));

        self.client
            .get(url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(header::ACCEPT, SINGLE_OBJECT)
    }
}
