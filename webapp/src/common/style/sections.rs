pub const SECTION_STYLES: &str = r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  color: var(--text-inverse);
  transition: padding var(--transition-normal) ease, box-shadow var(--transition-normal) ease;
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo { display: flex; align-items: center; gap: var(--space-2); color: inherit; font-weight: 600; }
.logo img { height: 40px; }

.nav-links ul { display: flex; gap: var(--space-4); list-style: none; }
.nav-item { position: relative; }
.nav-link { color: inherit; font-weight: 500; }

.nav-hint {
  position: absolute;
  top: 100%;
  left: 50%;
  transform: translate(-50%, 4px);
  font-size: 0.75rem;
  white-space: nowrap;
  opacity: 0;
  transition: opacity var(--transition-fast) ease;
}
.nav-hint.visible { opacity: 0.8; }

.nav-actions { display: flex; align-items: center; gap: var(--space-2); }
.theme-toggle, .menu-button {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: none;
  color: inherit;
  cursor: pointer;
}
.menu-button { display: none; background: transparent; }

.mobile-menu { padding: var(--space-4); }
.mobile-menu ul { list-style: none; }
.mobile-link { display: block; padding: var(--space-2) 0; color: inherit; }
.mobile-theme { padding-top: var(--space-2); }

@media (min-width: 768px) {
  .mobile-menu { display: none; }
}

@media (max-width: 767px) {
  .nav-links { display: none; }
  .menu-button { display: inline-block; }
}

/* Sections */
.section { position: relative; padding: var(--space-16) 0; overflow: hidden; }
.container { max-width: var(--container-width); margin: 0 auto; padding: 0 var(--space-4); position: relative; }
.section-title { font-size: 2rem; font-weight: 700; text-align: center; margin-bottom: var(--space-8); }

.particle, .parallax-layer, .hero-shape {
  position: absolute;
  pointer-events: none;
  border-radius: 50%;
  background: rgba(185, 28, 28, 0.08);
}
.particle { width: 60px; height: 60px; }
.particle-1 { top: 20%; left: 80%; }
.particle-2 { top: 60%; left: 10%; }
.particle-3 { top: 75%; left: 60%; }
.particle-4 { top: 35%; left: 35%; }
.particle-5 { top: 85%; left: 90%; }
.parallax-layer { width: 320px; height: 320px; top: 10%; left: -80px; }
.parallax-layer-1 { left: auto; right: -120px; top: 50%; }
.parallax-layer-2 { top: 80%; left: 40%; }

/* Hero */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  background-size: cover;
  background-position: center;
  color: var(--text-inverse);
  overflow: hidden;
}
.hero-content { text-align: center; padding: var(--space-16) var(--space-4); }
.hero-title { font-size: 3rem; font-weight: 700; margin-bottom: var(--space-4); }
.hero-subtitle { font-size: 1.25rem; opacity: 0.9; }
.hero-actions { display: flex; gap: var(--space-4); justify-content: center; margin-top: var(--space-8); }
.hero-shape { width: 120px; height: 120px; background: rgba(255, 255, 255, 0.1); }
.hero-shape-0 { top: 15%; left: 10%; }
.hero-shape-1 { top: 25%; right: 12%; }
.hero-shape-2 { bottom: 20%; left: 20%; }
.hero-shape-3 { bottom: 15%; right: 25%; }

.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: var(--space-4); }
.stat-card { text-align: center; padding: var(--space-6); border-radius: var(--radius-lg); background: rgba(0, 0, 0, 0.3); }
.stat-value { font-size: 2.5rem; font-weight: 700; }

/* About */
.about-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: var(--space-6); }
.about-card { padding: var(--space-6); cursor: default; }
.card-icon { font-size: 2rem; color: var(--primary); margin-bottom: var(--space-4); }
.card-stat { margin-top: var(--space-4); font-weight: 600; }

.history { margin-top: var(--space-12); }
.timeline { height: 4px; background: var(--border); border-radius: var(--radius-full); margin-bottom: var(--space-6); }
.timeline-bar { height: 100%; background: var(--primary); border-radius: inherit; transition: width 1.5s ease; }
.history-body { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: var(--space-6); }
.history-image { width: 100%; border-radius: var(--radius-lg); cursor: zoom-in; }
.about-cta { text-align: center; margin-top: var(--space-8); }

/* News, gallery, staff */
.news-grid, .staff-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: var(--space-6); }
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: var(--space-4); }

.card-media { position: relative; }
.card-media img, .gallery-item img, .staff-portrait img { display: block; width: 100%; height: 220px; object-fit: cover; }
.card-media .badge { position: absolute; top: var(--space-3); left: var(--space-3); }
.card-body { padding: var(--space-4); }
.card-body time { font-size: 0.875rem; color: var(--text-secondary); }
.read-more { color: var(--primary); font-weight: 500; }

.gallery-caption {
  position: absolute;
  inset: auto 0 0 0;
  padding: var(--space-3);
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
  color: var(--text-inverse);
}

.staff-card { transform-style: preserve-3d; }
.role-badge { font-size: 0.75rem; color: var(--primary); display: inline-flex; gap: var(--space-1); }
.staff-title { color: var(--text-secondary); }
.staff-qualification { font-size: 0.875rem; }
.staff-social { display: flex; gap: var(--space-3); margin-top: var(--space-3); }

/* Contact */
.contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: var(--space-8); }
.contact-info { display: flex; gap: var(--space-4); margin-bottom: var(--space-4); }
.info-icon { color: var(--primary); font-size: 1.25rem; }
.map { min-height: 260px; border-radius: var(--radius-lg); overflow: hidden; background: var(--border); }
.map-placeholder { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 260px; color: var(--text-secondary); }
.form-success { text-align: center; padding: var(--space-12); color: var(--success); }

.site-footer { padding: var(--space-8) var(--space-4); text-align: center; background: var(--neutral-900); color: var(--neutral-300); }
.not-found, .load-error { padding: var(--space-16) var(--space-4); text-align: center; }
"#;
