pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active { transform: translateY(1px); }
.btn:disabled { opacity: 0.7; cursor: wait; }
.btn-lg { padding: var(--space-3) var(--space-6); font-size: 1.125rem; }

.btn-primary { background-color: var(--primary); color: var(--text-inverse); }
.btn-primary:hover { background-color: var(--primary-dark); text-decoration: none; }
.btn-secondary { background-color: rgba(255, 255, 255, 0.9); color: var(--primary-dark); }

.ripple-host { position: relative; overflow: hidden; }
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.4);
  transform: scale(0);
  animation: ripple 600ms linear;
  pointer-events: none;
}
@keyframes ripple { to { transform: scale(4); opacity: 0; } }

/* Filters */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
}

.filter-btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
}

.filter-btn.active {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

/* Cards */
.news-card, .gallery-item, .staff-card, .about-card {
  position: relative;
  background: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  cursor: pointer;
  transition: opacity var(--transition-normal) ease, transform var(--transition-normal) ease;
}

.news-card:focus-visible, .gallery-item:focus-visible, .staff-card:focus-visible {
  outline: 3px solid var(--primary-light);
  outline-offset: 2px;
}

.card-reflection, .card-glare {
  position: absolute;
  inset: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal) ease;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  color: var(--text-inverse);
}

.counter.highlight, .stat-value.highlight { color: var(--secondary); }

/* Lightbox */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background: rgba(0, 0, 0, 0.85);
  transition: opacity var(--transition-normal) ease;
}

.lightbox-panel {
  position: relative;
  max-width: 900px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface);
  color: var(--text-primary);
  border-radius: var(--radius-xl);
  transition: transform var(--transition-normal) ease;
}

.lightbox-close {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: white;
  cursor: pointer;
}

.lightbox-image { display: block; width: 100%; max-height: 70vh; object-fit: contain; }
.lightbox-text { padding: var(--space-6); }
.lightbox-profile { display: flex; flex-wrap: wrap; }
.lightbox-portrait { width: 280px; max-width: 100%; object-fit: cover; }

/* Forms */
.form-group { position: relative; margin-bottom: var(--space-6); }

.form-input {
  width: 100%;
  padding: var(--space-4) var(--space-3) var(--space-2);
  border: 2px solid var(--border);
  border-radius: var(--radius-md);
  background: var(--surface);
  color: var(--text-primary);
}

.floating-label {
  position: absolute;
  left: var(--space-3);
  top: var(--space-3);
  color: var(--text-secondary);
  pointer-events: none;
  transition: all var(--transition-fast) ease;
}

.floating-label.active { top: 2px; font-size: 0.75rem; color: var(--primary); }
.field-error { margin-top: var(--space-1); font-size: 0.875rem; color: var(--error); }

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}
"#;
