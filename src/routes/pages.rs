use axum::extract::State;
use axum::response::Html;

use crate::identity::DeploymentIdentity;
use crate::state::AppState;

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(render_landing(&state.identity))
}

/// Render the landing page for one deployment identity. Pure function of
/// the identity so the template can be tested without a server.
fn render_landing(identity: &DeploymentIdentity) -> String {
    let version = &identity.version;
    let hostname = &identity.hostname;
    let color = identity.color.hex();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Hello API - {version}</title>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
      margin: 0;
      background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
      color: white;
    }}
    .container {{
      text-align: center;
      padding: 40px;
      background: rgba(255,255,255,0.05);
      border-radius: 20px;
      border: 2px solid {color};
      box-shadow: 0 0 30px {color}40;
    }}
    h1 {{
      font-size: 72px;
      margin: 0;
      color: {color};
    }}
    p {{
      font-size: 24px;
      color: #9ca3af;
      margin: 20px 0 0;
    }}
    .version-badge {{
      display: inline-block;
      background: {color};
      color: white;
      padding: 8px 24px;
      border-radius: 20px;
      font-size: 18px;
      font-weight: bold;
      margin-top: 20px;
    }}
    .hostname {{
      font-size: 12px;
      color: #6b7280;
      margin-top: 20px;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>🚀 Hello!</h1>
    <p>Traffic Splitting Demo</p>
    <div class="version-badge">{version}</div>
    <p class="hostname">Hostname: {hostname}</p>
  </div>
</body>
</html>
"#
    )
}
