/// Built-in modifier list used when no modifier file is given.
///
/// Order is significant for candidate generation, and the repeated entries are
/// kept on purpose: candidates are never deduplicated.
pub const DEFAULT_MODIFIERS: &[&str] = &[
    "prod", "dev", "qa", "uat", "bucket", "files", "archives", "backup", "backups", "cdn", "test",
    "stage", "staging", "temp", "temporary", "public", "private", "media", "data", "logs",
    "images", "assets", "resources", "docs", "documents", "reports", "analytics", "static",
    "content", "uploads", "downloads", "scripts", "configs", "configurations", "settings",
    "release", "releases", "home", "app", "apps", "application", "applications", "code",
    "source", "sources", "library", "libraries", "repo", "repos", "repository", "repositories",
    "env", "environment", "environments", "db", "database", "databases", "cache", "caches",
    "archive", "archives", "backup", "backups", "cdn", "proxy", "proxies", "service",
    "services", "api", "apis", "v1", "v2", "v3", "main", "mainnet", "testnet", "development",
    "production", "integration", "live", "snapshot", "snapshots", "audit", "audits", "log",
    "logs", "metrics", "metric", "tracking", "tracker", "tracers", "trace", "traces", "user",
    "users", "account", "accounts", "session", "sessions", "activity", "activities", "event",
    "events", "transaction", "transactions", "billing", "invoice", "invoices", "customer",
    "customers", "client", "clients", "partner", "partners", "vendor", "vendors", "supplier",
    "suppliers", "inventory", "inventories", "order", "orders", "purchase", "purchases", "sale",
    "sales", "discount", "discounts", "coupon", "coupons", "offer", "offers", "deal", "deals",
    "promo", "promos", "promotion", "promotions",
];

pub fn default_modifiers() -> Vec<String> {
    DEFAULT_MODIFIERS.iter().map(|m| (*m).to_string()).collect()
}
