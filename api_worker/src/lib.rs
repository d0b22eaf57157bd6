use proto::{is_valid_user_id, C2S, S2C, DEFAULT_LEADERBOARD_LIMIT};
use rand::Rng;
use serde::{Deserialize, Serialize};
use worker::*;

mod page;

// Export the Durable Object from leaderboard_do
pub use leaderboard_do::LeaderboardDO;

/// Collection used when `APP_ID` is not configured
const DEFAULT_APP_ID: &str = "hoopshot-default";
const USER_ID_LEN: usize = 20;

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let router = Router::new();

    router
        .get_async("/", handle_index)
        .post_async("/api/identity", handle_identity)
        .post_async("/api/rpc", handle_rpc)
        .get_async("/api/leaderboard", handle_leaderboard_json)
        .run(req, env)
        .await
}

async fn handle_index(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_html(page::INDEX_HTML)
}

#[derive(Debug, Default, Deserialize)]
struct IdentityRequest {
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct IdentityResponse {
    user_id: String,
    fresh: bool,
}

/// Anonymous identity: hand back a well-formed existing id, otherwise mint one
async fn handle_identity(mut req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let body: IdentityRequest = req.json().await.unwrap_or_default();
    let (user_id, fresh) = resolve_identity(body.user_id.as_deref(), &mut rand::thread_rng());
    if fresh {
        console_log!("Worker: Minted anonymous user {}", user_id);
    }
    Response::from_json(&IdentityResponse { user_id, fresh })
}

/// Forward a postcard C2S body to the collection's Durable Object
async fn handle_rpc(mut req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let body = req.bytes().await?;
    if let Err(e) = C2S::from_bytes(&body) {
        console_error!("Worker: Rejecting malformed RPC body: {e:?}");
        return Response::error("Malformed request", 400);
    }

    let reply = forward_to_leaderboard(&ctx.env, body).await?;
    let mut resp = Response::from_bytes(reply)?;
    resp.headers_mut()
        .set("Content-Type", "application/octet-stream")?;
    Ok(resp)
}

/// Human-readable top list
async fn handle_leaderboard_json(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let url = req.url()?;
    let requested = url
        .query_pairs()
        .find(|(k, _)| k == "limit")
        .map(|(_, v)| v.into_owned());
    let limit = parse_limit(requested.as_deref(), configured_limit(&ctx.env));

    let msg = C2S::FetchLeaderboard { limit };
    let bytes = msg
        .to_bytes()
        .map_err(|e| Error::RustError(format!("Failed to serialize C2S: {e:?}")))?;
    let reply = forward_to_leaderboard(&ctx.env, bytes).await?;

    match S2C::from_bytes(&reply) {
        Ok(S2C::Leaderboard { entries }) => Response::from_json(&entries),
        Ok(S2C::Error { message }) => Response::error(message, 500),
        Ok(other) => {
            console_error!("Worker: Unexpected leaderboard reply: {:?}", other);
            Response::error("Unexpected reply", 502)
        }
        Err(e) => {
            console_error!("Worker: Failed to decode leaderboard reply: {e:?}");
            Response::error("Bad reply", 502)
        }
    }
}

async fn forward_to_leaderboard(env: &Env, body: Vec<u8>) -> Result<Vec<u8>> {
    let namespace = env.durable_object("LEADERBOARD")?;

    // One object per application id: that object is the whole collection
    let stub = namespace.get_by_name(&app_id(env))?;

    let mut init = RequestInit::new();
    init.with_method(Method::Post)
        .with_body(Some(js_sys::Uint8Array::from(body.as_slice()).into()));
    let do_req = Request::new_with_init("https://leaderboard/rpc", &init)?;

    let mut resp = stub.fetch_with_request(do_req).await?;
    resp.bytes().await
}

fn app_id(env: &Env) -> String {
    env.var("APP_ID")
        .map(|v| v.to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_ID.to_string())
}

fn configured_limit(env: &Env) -> u8 {
    let configured = env.var("LEADERBOARD_LIMIT").ok().map(|v| v.to_string());
    parse_limit(configured.as_deref(), DEFAULT_LEADERBOARD_LIMIT)
}

/// Parse a row limit, clamped to 1..=50; anything unparsable uses the fallback
fn parse_limit(raw: Option<&str>, fallback: u8) -> u8 {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .map(|n| n.clamp(1, 50))
        .unwrap_or(fallback)
}

fn resolve_identity<R: Rng>(existing: Option<&str>, rng: &mut R) -> (String, bool) {
    match existing {
        Some(id) if is_valid_user_id(id) => (id.to_string(), false),
        _ => (generate_user_id(rng), true),
    }
}

/// Generate a random user id (A-Z, a-z, 0-9)
fn generate_user_id<R: Rng>(rng: &mut R) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    (0..USER_ID_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARS.len());
            CHARS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_user_id_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_user_id(&mut rng);
        assert_eq!(id.len(), USER_ID_LEN);
        assert!(is_valid_user_id(&id));
    }

    #[test]
    fn test_generated_ids_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_ne!(generate_user_id(&mut rng), generate_user_id(&mut rng));
    }

    #[test]
    fn test_existing_identity_is_reused() {
        let mut rng = StdRng::seed_from_u64(1);
        let (id, fresh) = resolve_identity(Some("abcDEF123456"), &mut rng);
        assert_eq!(id, "abcDEF123456");
        assert!(!fresh);
    }

    #[test]
    fn test_malformed_identity_is_replaced() {
        let mut rng = StdRng::seed_from_u64(1);
        let (id, fresh) = resolve_identity(Some("not valid!"), &mut rng);
        assert!(fresh);
        assert!(is_valid_user_id(&id));

        let (_, fresh) = resolve_identity(None, &mut rng);
        assert!(fresh);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(Some("5"), 10), 5);
        assert_eq!(parse_limit(Some(" 200 "), 10), 50);
        assert_eq!(parse_limit(Some("0"), 10), 1);
        assert_eq!(parse_limit(Some("lots"), 10), 10);
        assert_eq!(parse_limit(None, 10), 10);
    }
}
