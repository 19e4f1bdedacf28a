pub fn validate_hostname(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Site name cannot be empty".to_string());
    }
    if name.len() > 253 {
        return Err("Site name cannot exceed 253 characters".to_string());
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !valid_chars {
        return Err(
            "Site name can only contain letters, digits, hyphens, underscores and dots".to_string(),
        );
    }
    if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
        return Err("Site name cannot contain empty labels".to_string());
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Target URL cannot be empty".to_string());
    }
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.len() > 500 {
        return Err("Description cannot exceed 500 characters".to_string());
    }
    Ok(())
}
