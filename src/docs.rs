use utoipa::OpenApi;

use crate::common::response::ErrorResponse;
use crate::modules::render::dto::{RenderDetails, RenderJobDescriptor, RenderRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::render::handler::render_video,
    ),
    components(
        schemas(RenderRequest, RenderJobDescriptor, RenderDetails, ErrorResponse)
    ),
    tags(
        (name = "Render", description = "Video render job initiation")
    )
)]
pub struct ApiDoc;
