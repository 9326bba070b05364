use ag_domain::config::{Config, ContextWindow};

#[test]
fn default_host_is_localhost() {
    let config = Config::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
}

#[test]
fn explicit_zero_host_parses() {
    let toml_str = r#"
[server]
host = "0.0.0.0"
port = 5000
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn default_cors_allows_only_localhost() {
    let config = Config::default();
    assert!(config.server.cors.allowed_origins.contains(&"http://localhost:*".to_string()));
    assert!(config.server.cors.allowed_origins.contains(&"http://127.0.0.1:*".to_string()));
}

#[test]
fn full_config_parses() {
    let toml_str = r#"
[assistant]
system_prompt = "Sei un assistente che aiuta a gestire appuntamenti e impegni."
temperature = 0.2

[context]
window = { mode = "last_turns", count = 50 }

[store]
path = "/var/lib/agendum"
timezone = "Europe/Rome"

[llm]
timeout_ms = 30000

[[llm.providers]]
id = "azure"
kind = "azure_openai"
base_url = "https://example.openai.azure.com"
default_model = "gpt-4o"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.assistant.system_prompt.starts_with("Sei"));
    assert_eq!(config.context.window, ContextWindow::LastTurns { count: 50 });
    assert_eq!(config.store.timezone, "Europe/Rome");
    assert_eq!(config.llm.timeout_ms, 30_000);
    assert_eq!(config.llm.providers.len(), 1);
    assert_eq!(config.llm.selected_provider().unwrap().id, "azure");
    assert!(config.validate().is_empty());
}

#[test]
fn default_system_prompt_mentions_appointments() {
    let config = Config::default();
    assert!(config.assistant.system_prompt.contains("appointments"));
}
