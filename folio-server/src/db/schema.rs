/// SQL schema for the folio database
/// Creates all tables with constraints and the display-order indexes
pub const SCHEMA: &str = r#"
-- Admin accounts (a single seeded row in practice)
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
);

-- Site settings singleton; the CHECK pins the row to id 1
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    profile_image_url TEXT NOT NULL,
    profile_name TEXT NOT NULL,
    profile_age INTEGER NOT NULL CHECK (profile_age > 0),
    whatsapp_url TEXT NOT NULL,
    background_audio_url TEXT,
    status_texts TEXT NOT NULL
);

-- Friend cards shown on the public page
CREATE TABLE IF NOT EXISTS friends (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    display_order INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_friends_display_order ON friends(display_order);

-- Project cards
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    project_url TEXT NOT NULL,
    display_order INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_projects_display_order ON projects(display_order);

-- Social media links
CREATE TABLE IF NOT EXISTS social_media (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    username TEXT NOT NULL,
    url TEXT NOT NULL,
    icon_class TEXT NOT NULL,
    display_order INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_social_media_display_order ON social_media(display_order);
"#;

/// Rows the server cannot run without: the admin account and the settings
/// singleton. Idempotent, applied on every startup.
pub const SEED_DATA: &str = r#"
INSERT OR IGNORE INTO users (id, username, password)
VALUES (1, 'aka', 'akaanakbaik17');

INSERT OR IGNORE INTO settings (id, profile_image_url, profile_name, profile_age, whatsapp_url, background_audio_url, status_texts)
VALUES (
    1,
    'https://files.catbox.moe/qfamnx.jpg',
    'aka',
    15,
    'https://wa.me/6281266950382',
    'https://www.soundjay.com/misc/sounds/magic-chime-02.mp3',
    '{"id":["Pelajar","Developer","Pemula"],"en":["Student","Developer","Beginner"]}'
);
"#;

/// Demo portfolio content for a freshly provisioned site. Idempotent; the
/// server binary applies it at startup, tests start from empty collections
/// instead.
pub const DEMO_DATA: &str = r#"
-- Demo friends
INSERT OR IGNORE INTO friends (id, name, description, image_url, display_order) VALUES
    (1, 'Budi Santoso', 'Teman sekolah yang ahli dalam matematika dan sains', 'https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face', 1),
    (2, 'Sari Dewi', 'Designer grafis yang kreatif dan berbakat dalam seni', 'https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=100&h=100&fit=crop&crop=face', 2),
    (3, 'Andi Rahman', 'Programmer muda yang passionate dalam teknologi', 'https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face', 3),
    (4, 'Fitri Maharani', 'Penulis muda yang gemar membuat cerita inspiratif', 'https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face', 4);

-- Demo projects
INSERT OR IGNORE INTO projects (id, name, description, image_url, project_url, display_order) VALUES
    (1, 'Portfolio Website', 'Website portfolio modern dengan React dan Tailwind CSS', 'https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=350&h=200&fit=crop', '#', 1),
    (2, 'Mobile Learning App', 'Aplikasi pembelajaran interaktif untuk siswa SMA', 'https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=350&h=200&fit=crop', '#', 2),
    (3, '2D Puzzle Game', 'Game puzzle edukatif menggunakan JavaScript dan Canvas', 'https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=350&h=200&fit=crop', '#', 3);

-- Demo social media links
INSERT OR IGNORE INTO social_media (id, name, username, url, icon_class, display_order) VALUES
    (1, 'TikTok', '@aka_profile', 'https://tiktok.com/@aka_profile', 'fab fa-tiktok', 1),
    (2, 'Instagram', '@aka_ig', 'https://instagram.com/aka_ig', 'fab fa-instagram', 2),
    (3, 'Telegram', '@aka_tg', 'https://t.me/aka_tg', 'fab fa-telegram-plane', 3),
    (4, 'GitHub', '@aka-dev', 'https://github.com/aka-dev', 'fab fa-github', 4),
    (5, 'WhatsApp', '+62 812-6695-0382', 'https://wa.me/6281266950382', 'fab fa-whatsapp', 5);
"#;
