mod test_health;
mod test_profile_endpoints;
mod test_project_endpoints;
