use phf::phf_set;

/// Domaines jetables connus (comparaison exacte, en minuscules).
const DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "mailinator.com",
    "guerrillamail.com",
    "tempmail.com",
    "yopmail.com",
    "10minutemail.com",
};

/// Boîtes fonctionnelles (partie locale, en minuscules).
const ROLE_LOCAL_PARTS: phf::Set<&'static str> = phf_set! {
    "admin",
    "administrator",
    "billing",
    "contact",
    "help",
    "hostmaster",
    "info",
    "marketing",
    "no-reply",
    "noreply",
    "office",
    "postmaster",
    "sales",
    "support",
    "webmaster",
};

pub(crate) fn is_disposable_domain(domain: &str) -> bool {
    DISPOSABLE_DOMAINS.contains(domain.to_lowercase().as_str())
}

pub(crate) fn is_role_local_part(local: &str) -> bool {
    ROLE_LOCAL_PARTS.contains(local.to_lowercase().as_str())
}
