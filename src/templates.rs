//! HTML templates, embedded as strings and rendered with minijinja.

use crate::error::AppError;
use axum::response::Html;
use minijinja::Environment;
use minijinja::value::Value;
use std::sync::LazyLock;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8"><title>Contact Us</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <style>body{padding:2rem;}</style>
</head>
<body>
  <div class="container">
    {% if flash %}
    <div class="alert alert-{{ flash.level }}">{{ flash.message }}</div>
    {% endif %}
    <h2 id="contact">Contact Us</h2>
    <form method="post" action="/">
      <div class="mb-3">
        <label class="form-label" for="name">Name</label>
        <input class="form-control" type="text" id="name" name="name">
      </div>
      <div class="mb-3">
        <label class="form-label" for="email">Email</label>
        <input class="form-control" type="text" id="email" name="email">
      </div>
      <div class="mb-3">
        <label class="form-label" for="message">Message</label>
        <textarea class="form-control" id="message" name="message" rows="4"></textarea>
      </div>
      <button class="btn btn-primary" type="submit">Send</button>
    </form>
  </div>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8"><title>Admin Login</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <style>body{padding:2rem;}</style>
</head>
<body>
  <div class="container" style="max-width:24rem;">
    {% if flash %}
    <div class="alert alert-{{ flash.level }}">{{ flash.message }}</div>
    {% endif %}
    <h2>Admin Login</h2>
    <form method="post" action="/login">
      <div class="mb-3">
        <label class="form-label" for="username">Username</label>
        <input class="form-control" type="text" id="username" name="username">
      </div>
      <div class="mb-3">
        <label class="form-label" for="password">Password</label>
        <input class="form-control" type="password" id="password" name="password">
      </div>
      <button class="btn btn-primary" type="submit">Log in</button>
    </form>
  </div>
</body>
</html>
"#;

const ADMIN_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8"><title>Admin Dashboard</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <style>body{padding:2rem;}</style>
</head>
<body>
  <div class="container">
    {% if flash %}
    <div class="alert alert-{{ flash.level }}">{{ flash.message }}</div>
    {% endif %}
    <div class="d-flex justify-content-between align-items-center mb-4">
      <h2>Contact Messages ({{ contacts|length }})</h2>
      <div>
        <a href="/admin/export" class="btn btn-success">Export CSV</a>
        <a href="/logout" class="btn btn-outline-danger">Logout</a>
      </div>
    </div>
    <div class="row">
      {% for c in contacts %}
      <div class="col-md-6 mb-3">
        <div class="card">
          <div class="card-body">
            <h5 class="card-title">{{ c.name }} <small class="text-muted">({{ c.email }})</small></h5>
            <p class="card-text"><small>{{ c.timestamp }}</small></p>
            <p>{{ c.message }}</p>
          </div>
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</body>
</html>
"#;

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for (name, source) in [
        ("index.html", INDEX_HTML),
        ("login.html", LOGIN_HTML),
        ("admin.html", ADMIN_HTML),
    ] {
        env.add_template(name, source)
            .expect("invalid embedded template");
    }
    env
});

pub fn render(name: &str, ctx: Value) -> Result<Html<String>, AppError> {
    let body = ENV.get_template(name)?.render(ctx)?;
    Ok(Html(body))
}
